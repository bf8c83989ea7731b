//! Left-hand input panel: calculation inputs and the editable inventory.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use stockpile::config::MAX_HEADCOUNT;
use stockpile::{
    CurrentInventory, ReferenceTables, RiskLevel, StockpileInputs, StockpileOutputs,
    StockpileResult, SupplyItem,
};

use super::types::{format_quantity, rgb, SIDE_PANEL_WIDTH};

/// Draws the input panel and writes edits back only when something changed,
/// so the engine is not re-run every frame.
pub fn input_panel_ui(
    mut contexts: EguiContexts,
    mut inputs: ResMut<StockpileInputs>,
    mut inventory: ResMut<CurrentInventory>,
    tables: Res<ReferenceTables>,
    outputs: Res<StockpileOutputs>,
) {
    let mut edited_inputs = *inputs;
    let mut edited_inventory = *inventory;
    let recommended = outputs.report.as_ref().map(|r| r.result);

    egui::SidePanel::left("stockpile_inputs")
        .default_width(SIDE_PANEL_WIDTH)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("災害備蓄計算機");
            ui.small("Disaster stockpile calculator");
            ui.separator();

            render_calculation_inputs(ui, &mut edited_inputs, &tables);

            ui.add_space(8.0);
            ui.separator();

            render_inventory_editor(ui, &mut edited_inventory, recommended.as_ref());
        });

    if *inputs != edited_inputs {
        *inputs = edited_inputs;
    }
    if *inventory != edited_inventory {
        *inventory = edited_inventory;
    }
}

fn render_calculation_inputs(
    ui: &mut egui::Ui,
    inputs: &mut StockpileInputs,
    tables: &ReferenceTables,
) {
    egui::Grid::new("stockpile_input_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Headcount:");
            ui.add(
                egui::DragValue::new(&mut inputs.headcount)
                    .range(0..=MAX_HEADCOUNT)
                    .speed(1.0)
                    .suffix(" people"),
            );
            ui.end_row();

            ui.label("Risk level:");
            egui::ComboBox::from_id_salt("stockpile_risk_level")
                .selected_text(
                    egui::RichText::new(inputs.risk_level.label())
                        .color(rgb(inputs.risk_level.color())),
                )
                .show_ui(ui, |ui| {
                    for level in RiskLevel::ALL {
                        ui.selectable_value(&mut inputs.risk_level, level, level.label());
                    }
                });
            ui.end_row();

            ui.label("Location:");
            egui::ComboBox::from_id_salt("stockpile_location")
                .selected_text(tables.locations.display_name(inputs.location))
                .show_ui(ui, |ui| {
                    for (key, profile) in tables.locations.iter() {
                        ui.selectable_value(
                            &mut inputs.location,
                            *key,
                            format!("{} (x{:.2})", profile.display_name, profile.multiplier),
                        );
                    }
                });
            ui.end_row();
        });

    if let Ok(profile) = tables.locations.get(inputs.location) {
        if profile.base_risk != inputs.risk_level {
            ui.horizontal(|ui| {
                ui.small(format!("Suggested tier: {}", profile.base_risk.label()));
                if ui.small_button("Use").clicked() {
                    inputs.risk_level = profile.base_risk;
                }
            });
        }
    }
}

fn render_inventory_editor(
    ui: &mut egui::Ui,
    inventory: &mut CurrentInventory,
    recommended: Option<&StockpileResult>,
) {
    ui.heading("Current Inventory");

    egui::Grid::new("stockpile_inventory_editor")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for item in SupplyItem::ALL {
                let mut value = inventory.get(item);
                ui.label(item.label());
                let response = ui.add(
                    egui::DragValue::new(&mut value)
                        .range(0.0..=f64::MAX)
                        .speed(1.0)
                        .max_decimals(0)
                        .suffix(format!(" {}", item.unit())),
                );
                if response.changed() {
                    inventory.set(item, value);
                }
                if let Some(result) = recommended {
                    response.on_hover_text(format!(
                        "Recommended: {} {}",
                        format_quantity(item.recommended(result)),
                        item.unit()
                    ));
                }
                ui.end_row();
            }
        });

    ui.horizontal(|ui| {
        if let Some(result) = recommended {
            if ui.button("Fill to recommended").clicked() {
                *inventory = CurrentInventory::stocked_to(result);
            }
        }
        if ui.button("Clear").clicked() {
            *inventory = CurrentInventory::default();
        }
    });
}
