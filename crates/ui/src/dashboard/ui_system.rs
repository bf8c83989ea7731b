//! Main results panel system.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use stockpile::StockpileOutputs;

use super::panels;
use super::types::BAD_COLOR;

/// Displays the results for the latest stockpile report.
///
/// Runs after the engine so the panel always shows this frame's numbers.
pub fn results_panel_ui(mut contexts: EguiContexts, outputs: Res<StockpileOutputs>) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        if let Some(err) = &outputs.last_error {
            ui.colored_label(BAD_COLOR, format!("Configuration error: {err}"));
            ui.separator();
        }

        let Some(report) = &outputs.report else {
            ui.label("No results yet");
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            panels::render_kpis(ui, report);

            ui.add_space(4.0);
            panels::render_verdict(ui, report);

            ui.add_space(4.0);
            ui.separator();

            panels::render_inventory_table(ui, report);

            ui.add_space(4.0);
            ui.separator();

            panels::render_depletion_chart(ui, report);

            ui.add_space(4.0);
            ui.separator();

            panels::render_daily_consumption(ui, report);

            ui.add_space(4.0);
            ui.separator();

            panels::render_water_breakdown(ui, report);
        });
    });
}
