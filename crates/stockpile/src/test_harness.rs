//! # TestDashboard — headless harness for the stockpile plugin
//!
//! Wraps `bevy::app::App` + `MinimalPlugins` + `StockpilePlugin` so plugin
//! behaviour can be tested without a window or egui.

use bevy::app::App;
use bevy::prelude::*;

use crate::engine::StockpileInputs;
use crate::inventory::CurrentInventory;
use crate::report::StockpileReport;
use crate::systems::{ReferenceTables, StockpileOutputs};
use crate::StockpilePlugin;

pub struct TestDashboard {
    app: App,
}

impl TestDashboard {
    /// Default inputs (100 people, high risk, Tokyo) and standard tables,
    /// after one update.
    pub fn new() -> Self {
        Self::with_tables(ReferenceTables::default())
    }

    /// Like [`TestDashboard::new`] but with caller-supplied reference tables.
    pub fn with_tables(tables: ReferenceTables) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StockpilePlugin);
        app.insert_resource(tables);
        app.update();
        Self { app }
    }

    pub fn tick(&mut self) {
        self.app.update();
    }

    pub fn set_inputs(&mut self, inputs: StockpileInputs) {
        self.app.insert_resource(inputs);
    }

    pub fn set_tables(&mut self, tables: ReferenceTables) {
        self.app.insert_resource(tables);
    }

    pub fn inputs_mut(&mut self) -> Mut<'_, StockpileInputs> {
        self.app.world_mut().resource_mut::<StockpileInputs>()
    }

    pub fn inventory_mut(&mut self) -> Mut<'_, CurrentInventory> {
        self.app.world_mut().resource_mut::<CurrentInventory>()
    }

    pub fn outputs(&self) -> &StockpileOutputs {
        self.app.world().resource::<StockpileOutputs>()
    }

    /// The current report. Panics if no recompute has succeeded yet.
    pub fn report(&self) -> &StockpileReport {
        self.outputs()
            .report
            .as_ref()
            .expect("no stockpile report computed yet")
    }

    pub fn generation(&self) -> u64 {
        self.outputs().generation
    }
}

impl Default for TestDashboard {
    fn default() -> Self {
        Self::new()
    }
}
