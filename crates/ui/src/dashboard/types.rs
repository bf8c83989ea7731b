//! Formatting and colour helpers for the dashboard.

use bevy_egui::egui;

use stockpile::Verdict;

pub const SIDE_PANEL_WIDTH: f32 = 320.0;
pub const CHART_WIDTH: f32 = 560.0;
pub const CHART_HEIGHT: f32 = 180.0;

pub const WATER_COLOR: egui::Color32 = egui::Color32::from_rgb(0x3b, 0x82, 0xf6);
pub const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x06, 0xb6, 0xd4);
pub const OK_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 220, 80);
pub const WARN_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 180, 50);
pub const BAD_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 60, 60);

pub fn rgb((r, g, b): (u8, u8, u8)) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

pub fn verdict_color(verdict: Verdict) -> egui::Color32 {
    match verdict {
        Verdict::Satisfied => OK_COLOR,
        Verdict::Partial => WARN_COLOR,
        Verdict::Unsatisfied => BAD_COLOR,
    }
}

/// Integer with thousands separators: `1836000` -> `"1,836,000"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Non-negative quantity rounded to whole units, with separators.
pub fn format_quantity(value: f64) -> String {
    format_count(value.max(0.0).round() as u64)
}

pub fn format_yen(n: u64) -> String {
    format!("¥{}", format_count(n))
}
