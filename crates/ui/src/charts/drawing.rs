//! Painter helpers shared by the results panel charts.

use bevy_egui::egui;

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(30);
const GRID_LINE: egui::Color32 = egui::Color32::from_gray(50);

/// Largest value across all series, at least 1.0 so flat-zero data still
/// gets a valid scale.
pub(crate) fn series_max(series: &[&[f32]]) -> f32 {
    series
        .iter()
        .flat_map(|s| s.iter().copied())
        .fold(1.0_f32, f32::max)
}

fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
    for i in 0..=4 {
        let y = rect.min.y + (i as f32 / 4.0) * rect.height();
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(0.3, GRID_LINE),
        );
    }
}

/// Line chart with a zero baseline; every series shares the y scale.
pub(crate) fn draw_line_chart(
    ui: &mut egui::Ui,
    series: &[(&[f32], egui::Color32)],
    width: f32,
    height: f32,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, BACKGROUND);
    draw_grid(&painter, rect);

    let data: Vec<&[f32]> = series.iter().map(|(d, _)| *d).collect();
    let max_val = series_max(&data);

    for (values, color) in series {
        if values.len() < 2 {
            continue;
        }
        let points: Vec<egui::Pos2> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = rect.min.x + (i as f32 / (values.len() - 1) as f32) * rect.width();
                let y = rect.max.y - (v / max_val) * rect.height();
                egui::pos2(x, y)
            })
            .collect();

        for window in points.windows(2) {
            painter.line_segment([window[0], window[1]], egui::Stroke::new(1.5, *color));
        }
    }
}

/// One group of bars per x position, one bar per series in the group.
pub(crate) fn draw_grouped_bars(
    ui: &mut egui::Ui,
    series: &[(&[f32], egui::Color32)],
    width: f32,
    height: f32,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, BACKGROUND);
    draw_grid(&painter, rect);

    let groups = series.iter().map(|(d, _)| d.len()).max().unwrap_or(0);
    if groups == 0 || series.is_empty() {
        return;
    }
    let data: Vec<&[f32]> = series.iter().map(|(d, _)| *d).collect();
    let max_val = series_max(&data);

    let group_width = rect.width() / groups as f32;
    let bar_width = (group_width * 0.8) / series.len() as f32;

    for g in 0..groups {
        let group_x = rect.min.x + g as f32 * group_width + group_width * 0.1;
        for (s, (values, color)) in series.iter().enumerate() {
            let Some(&v) = values.get(g) else {
                continue;
            };
            let x = group_x + s as f32 * bar_width;
            let top = rect.max.y - (v / max_val) * rect.height();
            let bar = egui::Rect::from_min_max(
                egui::pos2(x, top),
                egui::pos2(x + bar_width - 1.0, rect.max.y),
            );
            painter.rect_filled(bar, 1.0, *color);
        }
    }
}

/// Horizontal bar split into segments proportional to `fractions`.
pub(crate) fn draw_share_bar(
    ui: &mut egui::Ui,
    segments: &[(f32, egui::Color32)],
    width: f32,
    height: f32,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, BACKGROUND);

    let mut x = rect.min.x;
    for (fraction, color) in segments {
        let w = fraction.clamp(0.0, 1.0) * rect.width();
        if w <= 0.0 {
            continue;
        }
        let seg = egui::Rect::from_min_max(
            egui::pos2(x, rect.min.y),
            egui::pos2((x + w).min(rect.max.x), rect.max.y),
        );
        painter.rect_filled(seg, 0.0, *color);
        x += w;
    }
}

pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.0, color);
    ui.label(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_max_floor_is_one() {
        let flat: &[f32] = &[0.0, 0.0];
        assert_eq!(series_max(&[flat]), 1.0);
        assert_eq!(series_max(&[]), 1.0);
    }

    #[test]
    fn test_series_max_across_series() {
        let a: &[f32] = &[1.0, 5.0];
        let b: &[f32] = &[3.0, 12.5];
        assert_eq!(series_max(&[a, b]), 12.5);
    }
}
