use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use stockpile::StockpileSet;

mod charts;
pub mod dashboard;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_dashboard_theme)
            .add_systems(
                Update,
                dashboard::input_panel_ui.in_set(StockpileSet::Input),
            )
            .add_systems(
                Update,
                dashboard::results_panel_ui.in_set(StockpileSet::Present),
            );
    }
}
