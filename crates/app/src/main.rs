use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Disaster Stockpile Calculator".to_string(),
            resolution: (1200.0, 800.0).into(),
            present_mode: PresentMode::AutoVsync,
            // Browser builds render into the page's canvas.
            canvas: Some("#stockpile-canvas".to_string()),
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    // The dashboard only changes on input, so idle between events.
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_secs(1)),
    })
    .add_plugins((stockpile::StockpilePlugin, ui::UiPlugin));

    info!("Starting stockpile dashboard");
    app.run();
}
