//! Chart drawing for the results panel: depletion lines, daily consumption
//! bars and the water breakdown bar.

mod drawing;

pub(crate) use drawing::{draw_grouped_bars, draw_line_chart, draw_share_bar, legend_item};
