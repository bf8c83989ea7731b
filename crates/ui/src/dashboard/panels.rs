//! Individual panel rendering functions for the results view.

use bevy_egui::egui;

use stockpile::StockpileReport;

use super::types::{
    format_count, format_quantity, format_yen, rgb, verdict_color, BAD_COLOR, CHART_HEIGHT,
    CHART_WIDTH, FOOD_COLOR, OK_COLOR, WATER_COLOR,
};
use crate::charts::{draw_grouped_bars, draw_line_chart, draw_share_bar, legend_item};

fn kpi_tile(ui: &mut egui::Ui, title: &str, value: String, detail: String) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(120.0);
        ui.vertical(|ui| {
            ui.small(title);
            ui.label(egui::RichText::new(value).strong().size(20.0));
            ui.small(detail);
        });
    });
}

/// Renders the KPI tile row.
pub fn render_kpis(ui: &mut egui::Ui, report: &StockpileReport) {
    let r = &report.result;
    ui.horizontal_wrapped(|ui| {
        kpi_tile(
            ui,
            "Stockpile days",
            format!("{} days", r.stockpile_days),
            report.location_name.clone(),
        );
        kpi_tile(
            ui,
            "Water",
            format!("{} L", format_count(r.recommended_water_total)),
            format!("{:.1} L/day", r.daily_water),
        );
        kpi_tile(
            ui,
            "Food",
            format!("{} meals", format_count(r.recommended_food_total)),
            format!("{:.1} meals/day", r.daily_food),
        );
        kpi_tile(
            ui,
            "Equipment",
            format!("{} kits", format_count(r.emergency_kits)),
            format!(
                "{} lights, {} blankets",
                format_count(r.lights),
                format_count(r.blankets)
            ),
        );
        kpi_tile(
            ui,
            "Estimated cost",
            format_yen(report.estimated_cost),
            "full recommendation".to_string(),
        );
    });
}

/// Renders the readiness verdict badge.
pub fn render_verdict(ui: &mut egui::Ui, report: &StockpileReport) {
    ui.horizontal(|ui| {
        ui.label("Readiness:");
        ui.colored_label(
            verdict_color(report.verdict),
            egui::RichText::new(report.verdict.label()).strong(),
        );
        ui.small(format!("(risk: {})", report.inputs.risk_level.label()))
            .on_hover_text("Satisfied needs both water and food at or above the recommendation");
    });
}

/// Renders the current-vs-recommended inventory table.
pub fn render_inventory_table(ui: &mut egui::Ui, report: &StockpileReport) {
    ui.heading("Inventory");
    egui::Grid::new("stockpile_inventory_table")
        .num_columns(4)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Item");
            ui.strong("Current");
            ui.strong("Recommended");
            ui.strong("Shortfall");
            ui.end_row();

            for row in &report.inventory {
                ui.label(row.item.label());
                ui.label(format!("{} {}", format_quantity(row.current), row.item.unit()));
                ui.label(format!(
                    "{} {}",
                    format_quantity(row.recommended),
                    row.item.unit()
                ));
                if row.is_met {
                    ui.colored_label(OK_COLOR, "OK");
                } else {
                    ui.colored_label(BAD_COLOR, format!("-{}", format_quantity(row.shortfall)));
                }
                ui.end_row();
            }
        });
}

/// Renders the projected water/food depletion chart.
pub fn render_depletion_chart(ui: &mut egui::Ui, report: &StockpileReport) {
    ui.heading("Depletion Projection");
    let water = report.depletion.water();
    let food = report.depletion.food();
    draw_line_chart(
        ui,
        &[(water.as_slice(), WATER_COLOR), (food.as_slice(), FOOD_COLOR)],
        CHART_WIDTH,
        CHART_HEIGHT,
    );
    ui.horizontal(|ui| {
        legend_item(ui, WATER_COLOR, "Water remaining (L)");
        legend_item(ui, FOOD_COLOR, "Food remaining (meals)");
    });
    match report.depletion.days_of_cover(&report.result) {
        Some(day) => {
            ui.colored_label(BAD_COLOR, format!("Current stock runs out on day {day}"));
        }
        None => {
            ui.colored_label(OK_COLOR, "Current stock lasts the full period");
        }
    }
}

/// Renders daily consumption bars.
pub fn render_daily_consumption(ui: &mut egui::Ui, report: &StockpileReport) {
    ui.heading("Daily Consumption");
    let water: Vec<f32> = report
        .daily_consumption
        .iter()
        .map(|d| d.water as f32)
        .collect();
    let food: Vec<f32> = report
        .daily_consumption
        .iter()
        .map(|d| d.food as f32)
        .collect();
    draw_grouped_bars(
        ui,
        &[(water.as_slice(), WATER_COLOR), (food.as_slice(), FOOD_COLOR)],
        CHART_WIDTH,
        CHART_HEIGHT * 0.7,
    );
    ui.horizontal(|ui| {
        legend_item(ui, WATER_COLOR, "Water (L/day)");
        legend_item(ui, FOOD_COLOR, "Food (meals/day)");
    });
}

/// Renders the water breakdown bar.
pub fn render_water_breakdown(ui: &mut egui::Ui, report: &StockpileReport) {
    ui.heading("Water Breakdown");
    let segments: Vec<(f32, egui::Color32)> = report
        .water_breakdown
        .iter()
        .map(|s| (s.fraction as f32, rgb(s.usage.color())))
        .collect();
    draw_share_bar(ui, &segments, CHART_WIDTH, 18.0);
    ui.horizontal_wrapped(|ui| {
        for share in &report.water_breakdown {
            legend_item(
                ui,
                rgb(share.usage.color()),
                &format!(
                    "{}: {} L ({:.0}%)",
                    share.usage.label(),
                    format_count(share.volume),
                    share.fraction * 100.0
                ),
            );
        }
    });
}
