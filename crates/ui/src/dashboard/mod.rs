//! Disaster stockpile dashboard.
//!
//! Left panel: headcount, risk tier and location inputs plus the editable
//! current inventory. Central panel: KPI tiles, readiness verdict, inventory
//! comparison table, depletion and daily consumption charts, and the water
//! breakdown. All numbers come from `StockpileOutputs`; this module never
//! calls the engine itself.

mod inputs;
mod panels;
mod tests;
pub mod types;
mod ui_system;

pub use inputs::input_panel_ui;
pub use ui_system::results_panel_ui;
