//! Stockpile requirement calculation.
//!
//! Maps (headcount, risk level, location) to recommended quantities. Every
//! rounding step rounds up so the facility is never under-provisioned by
//! rounding alone:
//!
//! - stockpile days = ceil(base days * location multiplier)
//! - drinking water = headcount * ration * days
//! - total water = ceil(drinking / 0.7); life water = total - drinking
//! - food = headcount * 3 meals * days
//! - kits / lights / blankets = ceil(headcount / 10 | 20 | 2)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DAYS_ROUNDING_EPSILON, DRINKING_SHARE_DENOMINATOR, DRINKING_SHARE_NUMERATOR, MAX_HEADCOUNT,
    MEALS_PER_PERSON_PER_DAY, PERSONS_PER_BLANKET, PERSONS_PER_KIT, PERSONS_PER_LIGHT,
};
use crate::error::StockpileError;
use crate::hazard::{HazardTable, RiskLevel};
use crate::location::{LocationKey, LocationTable};

/// The three user inputs. Replaced wholesale whenever the user edits one.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockpileInputs {
    pub headcount: u32,
    pub risk_level: RiskLevel,
    pub location: LocationKey,
}

impl Default for StockpileInputs {
    fn default() -> Self {
        Self {
            headcount: 100,
            risk_level: RiskLevel::High,
            location: LocationKey::Tokyo,
        }
    }
}

/// Recommended stockpile for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockpileResult {
    pub stockpile_days: u32,
    pub recommended_drinking_water: u64,
    pub recommended_life_water: u64,
    pub recommended_water_total: u64,
    pub recommended_food_total: u64,
    /// Water consumed per day; `daily_water * stockpile_days == recommended_water_total`.
    pub daily_water: f64,
    pub daily_food: f64,
    pub emergency_kits: u64,
    pub lights: u64,
    pub blankets: u64,
}

/// Compute the recommended stockpile.
///
/// Fails only when `inputs.risk_level` or `inputs.location` is missing from
/// the supplied tables. A headcount of zero yields all-zero quantities.
pub fn compute(
    inputs: &StockpileInputs,
    hazards: &HazardTable,
    locations: &LocationTable,
) -> Result<StockpileResult, StockpileError> {
    let hazard = hazards.get(inputs.risk_level)?;
    let location = locations.get(inputs.location)?;
    let ration = hazards.ration_for(inputs.risk_level)?;

    let stockpile_days = stockpile_days(hazard.stockpile_days_base, location.multiplier);
    let headcount = u64::from(inputs.headcount);
    // Saturates rather than wrapping for caller-supplied extreme tables.
    let person_days = headcount.saturating_mul(u64::from(stockpile_days));

    let recommended_drinking_water = (person_days as f64 * ration).ceil() as u64;
    let recommended_water_total = recommended_drinking_water
        .saturating_mul(DRINKING_SHARE_DENOMINATOR)
        .div_ceil(DRINKING_SHARE_NUMERATOR)
        .max(recommended_drinking_water);
    let recommended_life_water = recommended_water_total - recommended_drinking_water;
    let recommended_food_total = person_days.saturating_mul(MEALS_PER_PERSON_PER_DAY);

    let (daily_water, daily_food) = if stockpile_days == 0 {
        (0.0, 0.0)
    } else {
        let days = f64::from(stockpile_days);
        (
            recommended_water_total as f64 / days,
            recommended_food_total as f64 / days,
        )
    };

    Ok(StockpileResult {
        stockpile_days,
        recommended_drinking_water,
        recommended_life_water,
        recommended_water_total,
        recommended_food_total,
        daily_water,
        daily_food,
        emergency_kits: headcount.div_ceil(PERSONS_PER_KIT),
        lights: headcount.div_ceil(PERSONS_PER_LIGHT),
        blankets: headcount.div_ceil(PERSONS_PER_BLANKET),
    })
}

/// `ceil(base_days * multiplier)`, ignoring float noise below
/// [`DAYS_ROUNDING_EPSILON`].
pub fn stockpile_days(base_days: u32, multiplier: f64) -> u32 {
    let raw = f64::from(base_days) * multiplier - DAYS_ROUNDING_EPSILON;
    raw.ceil().max(0.0) as u32
}

/// Reject policy for raw headcount input: negative values are an error,
/// values above [`MAX_HEADCOUNT`] saturate.
pub fn headcount_from_input(raw: i64) -> Result<u32, StockpileError> {
    if raw < 0 {
        return Err(StockpileError::InvalidHeadcount(raw));
    }
    Ok(clamp_headcount(raw))
}

/// Clamp policy for raw headcount input: anything below 1 becomes 0.
pub fn clamp_headcount(raw: i64) -> u32 {
    raw.clamp(0, i64::from(MAX_HEADCOUNT)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::{HazardProfile, RationPolicy};

    fn run(headcount: u32, risk_level: RiskLevel, location: LocationKey) -> StockpileResult {
        compute(
            &StockpileInputs {
                headcount,
                risk_level,
                location,
            },
            &HazardTable::standard(),
            &LocationTable::standard(),
        )
        .unwrap()
    }

    #[test]
    fn test_tokyo_high_100_people() {
        let r = run(100, RiskLevel::High, LocationKey::Tokyo);
        assert_eq!(r.stockpile_days, 9);
        assert_eq!(r.recommended_drinking_water, 2700);
        assert_eq!(r.recommended_water_total, 3858);
        assert_eq!(r.recommended_life_water, 1158);
        assert_eq!(r.recommended_food_total, 2700);
        assert_eq!(r.emergency_kits, 10);
        assert_eq!(r.lights, 5);
        assert_eq!(r.blankets, 50);
        assert!((r.daily_water - 3858.0 / 9.0).abs() < 1e-9);
        assert!((r.daily_food - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_headcount_yields_zero_quantities() {
        let r = run(0, RiskLevel::Critical, LocationKey::Sendai);
        assert_eq!(r.stockpile_days, 13);
        assert_eq!(r.recommended_drinking_water, 0);
        assert_eq!(r.recommended_water_total, 0);
        assert_eq!(r.recommended_life_water, 0);
        assert_eq!(r.recommended_food_total, 0);
        assert_eq!(r.emergency_kits, 0);
        assert_eq!(r.lights, 0);
        assert_eq!(r.blankets, 0);
        assert_eq!(r.daily_water, 0.0);
        assert_eq!(r.daily_food, 0.0);
    }

    #[test]
    fn test_single_person_rounds_up_equipment() {
        let r = run(1, RiskLevel::Low, LocationKey::Fukuoka);
        assert_eq!(r.stockpile_days, 3);
        assert_eq!(r.emergency_kits, 1);
        assert_eq!(r.lights, 1);
        assert_eq!(r.blankets, 1);
        // 9 litres drinking -> ceil(90 / 7) = 13 total
        assert_eq!(r.recommended_drinking_water, 9);
        assert_eq!(r.recommended_water_total, 13);
        assert_eq!(r.recommended_life_water, 4);
    }

    #[test]
    fn test_exact_multiple_of_seven_has_no_extra_unit() {
        // 70 people * 3 L * 10 days = 2100 -> exactly 3000 total
        let r = run(70, RiskLevel::Critical, LocationKey::Fukuoka);
        assert_eq!(r.recommended_drinking_water, 2100);
        assert_eq!(r.recommended_water_total, 3000);
        assert_eq!(r.recommended_life_water, 900);
    }

    #[test]
    fn test_stockpile_days_ignores_float_noise() {
        // 10 * 1.1 is 11.000000000000002 in binary floating point
        assert_eq!(stockpile_days(10, 1.1), 11);
        assert_eq!(stockpile_days(7, 1.2), 9);
        assert_eq!(stockpile_days(3, 1.1), 4);
        assert_eq!(stockpile_days(5, 1.0), 5);
        assert_eq!(stockpile_days(0, 1.3), 0);
    }

    #[test]
    fn test_location_multiplier_drives_days() {
        let days: Vec<u32> = LocationKey::ALL
            .iter()
            .map(|loc| run(10, RiskLevel::Medium, *loc).stockpile_days)
            .collect();
        // tokyo 6, osaka 6 (5.5 -> 6), sendai 7 (6.5 -> 7), fukuoka 5, aichi 6 (5.75 -> 6)
        assert_eq!(days, vec![6, 6, 7, 5, 6]);
    }

    #[test]
    fn test_tier_dependent_ration_changes_water_only() {
        let inputs = StockpileInputs {
            headcount: 10,
            risk_level: RiskLevel::Critical,
            location: LocationKey::Fukuoka,
        };
        let fixed = compute(&inputs, &HazardTable::standard(), &LocationTable::standard()).unwrap();
        let tiered = compute(
            &inputs,
            &HazardTable::standard().with_ration_policy(RationPolicy::TierDependent),
            &LocationTable::standard(),
        )
        .unwrap();
        assert_eq!(fixed.recommended_drinking_water, 300);
        assert_eq!(tiered.recommended_drinking_water, 400);
        assert_eq!(fixed.recommended_food_total, tiered.recommended_food_total);
        assert_eq!(fixed.stockpile_days, tiered.stockpile_days);
    }

    #[test]
    fn test_unknown_risk_level_fails_fast() {
        let err = compute(
            &StockpileInputs::default(),
            &HazardTable::standard().without(RiskLevel::High),
            &LocationTable::standard(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StockpileError::UnknownEnumKey { table: "hazard", .. }
        ));
    }

    #[test]
    fn test_unknown_location_fails_fast() {
        let err = compute(
            &StockpileInputs::default(),
            &HazardTable::standard(),
            &LocationTable::empty(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StockpileError::UnknownEnumKey {
                table: "location",
                ..
            }
        ));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let inputs = StockpileInputs {
            headcount: 4321,
            risk_level: RiskLevel::Medium,
            location: LocationKey::Aichi,
        };
        let hazards = HazardTable::standard();
        let locations = LocationTable::standard();
        let a = compute(&inputs, &hazards, &locations).unwrap();
        let b = compute(&inputs, &hazards, &locations).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.daily_water.to_bits(), b.daily_water.to_bits());
        assert_eq!(a.daily_food.to_bits(), b.daily_food.to_bits());
    }

    #[test]
    fn test_extreme_tables_saturate_instead_of_overflowing() {
        let inputs = StockpileInputs {
            headcount: u32::MAX,
            risk_level: RiskLevel::Critical,
            location: LocationKey::Tokyo,
        };
        let hazards = HazardTable::standard().with_profile(
            RiskLevel::Critical,
            HazardProfile {
                stockpile_days_base: u32::MAX,
                water_per_person_per_day: 4.0,
            },
        );
        let locations = LocationTable::standard();
        let r = compute(&inputs, &hazards, &locations).unwrap();
        assert_eq!(r.stockpile_days, u32::MAX);
        assert!(r.recommended_water_total >= r.recommended_drinking_water);
        assert_eq!(
            r.recommended_life_water,
            r.recommended_water_total - r.recommended_drinking_water
        );
        assert_eq!(r.recommended_food_total, u64::MAX);
        assert!(crate::cost::estimate_cost(&r) > 0);
    }

    #[test]
    fn test_headcount_from_input() {
        assert_eq!(headcount_from_input(250), Ok(250));
        assert_eq!(headcount_from_input(0), Ok(0));
        assert_eq!(
            headcount_from_input(-3),
            Err(StockpileError::InvalidHeadcount(-3))
        );
        assert_eq!(headcount_from_input(i64::MAX), Ok(MAX_HEADCOUNT));
    }

    #[test]
    fn test_clamp_headcount() {
        assert_eq!(clamp_headcount(-10), 0);
        assert_eq!(clamp_headcount(42), 42);
        assert_eq!(clamp_headcount(10_000_000), MAX_HEADCOUNT);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let r = run(100, RiskLevel::High, LocationKey::Tokyo);
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["stockpileDays"], 9);
        assert_eq!(json["recommendedWaterTotal"], 3858);
        assert_eq!(json["emergencyKits"], 10);
    }
}
