//! Everything a dashboard needs for one set of inputs, as one serializable value.

use serde::{Deserialize, Serialize};

use crate::cost::estimate_cost;
use crate::depletion::{daily_consumption, project, DailyConsumption, DepletionSeries};
use crate::distribution::{water_breakdown, WaterShare};
use crate::engine::{compute, StockpileInputs, StockpileResult};
use crate::error::StockpileError;
use crate::hazard::HazardTable;
use crate::inventory::CurrentInventory;
use crate::location::LocationTable;
use crate::readiness::{evaluate, inventory_rows, InventoryRow, Verdict};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockpileReport {
    pub inputs: StockpileInputs,
    pub location_name: String,
    pub result: StockpileResult,
    pub depletion: DepletionSeries,
    pub daily_consumption: Vec<DailyConsumption>,
    pub verdict: Verdict,
    pub inventory: Vec<InventoryRow>,
    pub estimated_cost: u64,
    pub water_breakdown: [WaterShare; 3],
}

impl StockpileReport {
    pub fn build(
        inputs: &StockpileInputs,
        hazards: &HazardTable,
        locations: &LocationTable,
        inventory: &CurrentInventory,
    ) -> Result<Self, StockpileError> {
        let result = compute(inputs, hazards, locations)?;
        Ok(Self::from_result(
            *inputs,
            locations.display_name(inputs.location),
            result,
            inventory,
        ))
    }

    /// Assemble a report around an already computed result.
    pub fn from_result(
        inputs: StockpileInputs,
        location_name: &str,
        result: StockpileResult,
        inventory: &CurrentInventory,
    ) -> Self {
        Self {
            inputs,
            location_name: location_name.to_string(),
            depletion: project(&result, inventory),
            daily_consumption: daily_consumption(&result),
            verdict: evaluate(inventory, &result),
            inventory: inventory_rows(inventory, &result),
            estimated_cost: estimate_cost(&result),
            water_breakdown: water_breakdown(&result),
            result,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::RiskLevel;
    use crate::location::LocationKey;

    #[test]
    fn test_build_default_inputs() {
        let report = StockpileReport::build(
            &StockpileInputs::default(),
            &HazardTable::standard(),
            &LocationTable::standard(),
            &CurrentInventory::default(),
        )
        .unwrap();
        assert_eq!(report.location_name, "東京都");
        assert_eq!(report.result.stockpile_days, 9);
        assert_eq!(report.depletion.len(), 10);
        assert_eq!(report.daily_consumption.len(), 9);
        assert_eq!(report.verdict, Verdict::Unsatisfied);
        assert_eq!(report.inventory.len(), 6);
        assert_eq!(report.estimated_cost, 1_836_000);
    }

    #[test]
    fn test_build_propagates_unknown_key() {
        let err = StockpileReport::build(
            &StockpileInputs {
                headcount: 10,
                risk_level: RiskLevel::Low,
                location: LocationKey::Osaka,
            },
            &HazardTable::standard(),
            &LocationTable::standard().without(LocationKey::Osaka),
            &CurrentInventory::default(),
        )
        .unwrap_err();
        assert!(matches!(err, StockpileError::UnknownEnumKey { .. }));
    }

    #[test]
    fn test_json_field_names() {
        let report = StockpileReport::build(
            &StockpileInputs::default(),
            &HazardTable::standard(),
            &LocationTable::standard(),
            &CurrentInventory::default(),
        )
        .unwrap();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["inputs"]["riskLevel"], "high");
        assert_eq!(value["inputs"]["location"], "tokyo");
        assert_eq!(value["result"]["recommendedLifeWater"], 1158);
        assert_eq!(value["verdict"], "Unsatisfied");
        assert_eq!(value["estimatedCost"], 1_836_000);
        assert_eq!(value["depletion"]["points"][0]["day"], 1);
        assert_eq!(value["waterBreakdown"][2]["usage"], "emergency");

        let back: StockpileReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.inputs, report.inputs);
        assert_eq!(back.verdict, report.verdict);
    }
}
