use bevy::prelude::*;

pub mod config;
pub mod cost;
pub mod depletion;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod hazard;
pub mod inventory;
pub mod location;
pub mod readiness;
pub mod report;
pub mod systems;

#[cfg(test)]
pub mod test_harness;

pub use depletion::{project, DepletionPoint, DepletionSeries};
pub use engine::{compute, StockpileInputs, StockpileResult};
pub use error::StockpileError;
pub use hazard::{HazardProfile, HazardTable, RationPolicy, RiskLevel};
pub use inventory::{CurrentInventory, SupplyItem};
pub use location::{LocationKey, LocationProfile, LocationTable};
pub use readiness::{evaluate, Verdict};
pub use report::StockpileReport;
pub use systems::{ReferenceTables, StockpileOutputs};

/// Ordering of stockpile work within a frame: user edits land first, the
/// engine recomputes, then panels draw fresh outputs.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockpileSet {
    Input,
    Compute,
    Present,
}

pub struct StockpilePlugin;

impl Plugin for StockpilePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StockpileInputs>()
            .init_resource::<CurrentInventory>()
            .init_resource::<ReferenceTables>()
            .init_resource::<StockpileOutputs>()
            .configure_sets(
                Update,
                (
                    StockpileSet::Input,
                    StockpileSet::Compute,
                    StockpileSet::Present,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                systems::recompute_stockpile
                    .run_if(systems::stockpile_inputs_changed)
                    .in_set(StockpileSet::Compute),
            );
    }
}
