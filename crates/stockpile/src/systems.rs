//! ECS resources and systems that keep the dashboard outputs in sync with
//! the user's inputs.

use bevy::prelude::*;

use crate::engine::{compute, StockpileInputs};
use crate::error::StockpileError;
use crate::hazard::HazardTable;
use crate::inventory::CurrentInventory;
use crate::location::LocationTable;
use crate::report::StockpileReport;

/// Hazard and location reference tables in use. Hosts can replace this
/// resource to supply their own tables.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct ReferenceTables {
    pub hazards: HazardTable,
    pub locations: LocationTable,
}

impl ReferenceTables {
    pub fn validate(&self) -> Result<(), StockpileError> {
        self.hazards.validate()?;
        self.locations.validate()
    }
}

/// Latest computed report, rebuilt whenever an input resource changes.
#[derive(Resource, Debug, Clone, Default)]
pub struct StockpileOutputs {
    /// Last successful report. Kept as-is when a recompute fails.
    pub report: Option<StockpileReport>,
    pub last_error: Option<StockpileError>,
    /// Number of successful recomputes.
    pub generation: u64,
}

/// Run condition: any resource feeding the engine changed this frame.
pub fn stockpile_inputs_changed(
    inputs: Res<StockpileInputs>,
    inventory: Res<CurrentInventory>,
    tables: Res<ReferenceTables>,
) -> bool {
    inputs.is_changed() || inventory.is_changed() || tables.is_changed()
}

/// Recompute the stockpile report from the current inputs and inventory.
///
/// Malformed reference tables are rejected before the engine sees them.
pub fn recompute_stockpile(
    inputs: Res<StockpileInputs>,
    inventory: Res<CurrentInventory>,
    tables: Res<ReferenceTables>,
    mut outputs: ResMut<StockpileOutputs>,
) {
    if let Err(e) = tables.validate() {
        if tables.is_changed() {
            error!("Rejected reference tables: {}", e);
        }
        outputs.last_error = Some(e);
        return;
    }

    let result = match compute(&inputs, &tables.hazards, &tables.locations) {
        Ok(result) => result,
        Err(e) => {
            error!("Stockpile recompute failed for {:?}: {}", *inputs, e);
            outputs.last_error = Some(e);
            return;
        }
    };

    let report = StockpileReport::from_result(
        *inputs,
        tables.locations.display_name(inputs.location),
        result,
        &inventory,
    );

    if let Some(previous) = outputs.report.as_ref().map(|r| r.verdict) {
        if previous != report.verdict {
            info!("Readiness changed: {:?} -> {:?}", previous, report.verdict);
        }
    }
    debug!(
        "Stockpile recomputed: {} people, {:?}, {:?} -> {} days, {} L water, {} meals",
        inputs.headcount,
        inputs.risk_level,
        inputs.location,
        result.stockpile_days,
        result.recommended_water_total,
        result.recommended_food_total
    );

    outputs.report = Some(report);
    outputs.last_error = None;
    outputs.generation += 1;
}
