//! Rough procurement cost estimate in yen.

use crate::config::{COST_ROUNDING_STEP, KIT_UNIT_COST, MEAL_UNIT_COST, WATER_UNIT_COST};
use crate::engine::StockpileResult;

/// Cost of buying the full recommendation, rounded up to the next 1,000 yen.
pub fn estimate_cost(result: &StockpileResult) -> u64 {
    let raw = result
        .recommended_water_total
        .saturating_mul(WATER_UNIT_COST)
        .saturating_add(result.recommended_food_total.saturating_mul(MEAL_UNIT_COST))
        .saturating_add(result.emergency_kits.saturating_mul(KIT_UNIT_COST));
    raw.div_ceil(COST_ROUNDING_STEP)
        .saturating_mul(COST_ROUNDING_STEP)
}
