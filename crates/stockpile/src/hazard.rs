//! Risk tiers and the per-tier hazard profile table.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DRINKING_WATER_PER_PERSON_PER_DAY;
use crate::error::StockpileError;

/// Hazard tier selected by the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    #[default]
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Stable lowercase key, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Human-readable name for UI display.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low (低)",
            RiskLevel::Medium => "Medium (中)",
            RiskLevel::High => "High (高)",
            RiskLevel::Critical => "Critical (最高)",
        }
    }

    /// Badge colour as `(r, g, b)`.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            RiskLevel::Low => (0x22, 0xc5, 0x5e),
            RiskLevel::Medium => (0xf5, 0x9e, 0x0b),
            RiskLevel::High => (0xef, 0x44, 0x44),
            RiskLevel::Critical => (0xdc, 0x26, 0x26),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = StockpileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.key() == s)
            .ok_or_else(|| StockpileError::UnknownEnumKey {
                table: "hazard",
                key: s.to_string(),
            })
    }
}

/// Baseline duration and water ration for one risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardProfile {
    /// Days of supply before the location multiplier is applied.
    pub stockpile_days_base: u32,
    /// Per-person daily drinking water (litres). Only read under
    /// [`RationPolicy::TierDependent`].
    pub water_per_person_per_day: f64,
}

/// Which rule decides the per-person daily drinking water ration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RationPolicy {
    /// Fixed ration of [`DRINKING_WATER_PER_PERSON_PER_DAY`] for every tier.
    #[default]
    Fixed,
    /// Use the tier's `water_per_person_per_day`.
    TierDependent,
}

/// Reference table mapping each [`RiskLevel`] to its [`HazardProfile`].
#[derive(Debug, Clone, PartialEq)]
pub struct HazardTable {
    profiles: BTreeMap<RiskLevel, HazardProfile>,
    pub ration_policy: RationPolicy,
}

impl HazardTable {
    /// Empty table; every lookup fails until profiles are added.
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
            ration_policy: RationPolicy::default(),
        }
    }

    /// The built-in tiers: 3, 5, 7 and 10 days.
    pub fn standard() -> Self {
        Self::empty()
            .with_profile(RiskLevel::Low, profile(3, 3.0))
            .with_profile(RiskLevel::Medium, profile(5, 3.0))
            .with_profile(RiskLevel::High, profile(7, 3.0))
            .with_profile(RiskLevel::Critical, profile(10, 4.0))
    }

    pub fn with_profile(mut self, level: RiskLevel, profile: HazardProfile) -> Self {
        self.profiles.insert(level, profile);
        self
    }

    pub fn without(mut self, level: RiskLevel) -> Self {
        self.profiles.remove(&level);
        self
    }

    pub fn with_ration_policy(mut self, policy: RationPolicy) -> Self {
        self.ration_policy = policy;
        self
    }

    pub fn get(&self, level: RiskLevel) -> Result<&HazardProfile, StockpileError> {
        self.profiles
            .get(&level)
            .ok_or_else(|| StockpileError::UnknownEnumKey {
                table: "hazard",
                key: level.key().to_string(),
            })
    }

    /// Daily drinking water per person for `level` under this table's policy.
    pub fn ration_for(&self, level: RiskLevel) -> Result<f64, StockpileError> {
        let profile = self.get(level)?;
        Ok(match self.ration_policy {
            RationPolicy::Fixed => DRINKING_WATER_PER_PERSON_PER_DAY as f64,
            RationPolicy::TierDependent => profile.water_per_person_per_day,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RiskLevel, &HazardProfile)> {
        self.profiles.iter()
    }

    /// Check every profile has a positive duration and a positive, finite ration.
    pub fn validate(&self) -> Result<(), StockpileError> {
        for (level, p) in &self.profiles {
            if p.stockpile_days_base == 0 {
                return Err(invalid(*level, "stockpile days must be positive"));
            }
            if !p.water_per_person_per_day.is_finite() || p.water_per_person_per_day <= 0.0 {
                return Err(invalid(*level, "water ration must be positive"));
            }
        }
        Ok(())
    }
}

impl Default for HazardTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn profile(days: u32, water: f64) -> HazardProfile {
    HazardProfile {
        stockpile_days_base: days,
        water_per_person_per_day: water,
    }
}

fn invalid(level: RiskLevel, reason: &'static str) -> StockpileError {
    StockpileError::InvalidProfile {
        table: "hazard",
        key: level.key().to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_all_levels() {
        let table = HazardTable::standard();
        for level in RiskLevel::ALL {
            assert!(table.get(level).is_ok(), "missing {level:?}");
        }
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_standard_days() {
        let table = HazardTable::standard();
        let days: Vec<u32> = RiskLevel::ALL
            .iter()
            .map(|l| table.get(*l).unwrap().stockpile_days_base)
            .collect();
        assert_eq!(days, vec![3, 5, 7, 10]);
    }

    #[test]
    fn test_missing_level_is_unknown_key() {
        let table = HazardTable::standard().without(RiskLevel::Critical);
        let err = table.get(RiskLevel::Critical).unwrap_err();
        assert_eq!(
            err,
            StockpileError::UnknownEnumKey {
                table: "hazard",
                key: "critical".to_string()
            }
        );
    }

    #[test]
    fn test_fixed_ration_ignores_tier() {
        let table = HazardTable::standard();
        assert!((table.ration_for(RiskLevel::Critical).unwrap() - 3.0).abs() < f64::EPSILON);
        assert!((table.ration_for(RiskLevel::Low).unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tier_dependent_ration() {
        let table = HazardTable::standard().with_ration_policy(RationPolicy::TierDependent);
        assert!((table.ration_for(RiskLevel::Critical).unwrap() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_zero_days() {
        let table = HazardTable::standard().with_profile(RiskLevel::Low, profile(0, 3.0));
        assert!(matches!(
            table.validate(),
            Err(StockpileError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_ration() {
        let table = HazardTable::standard().with_profile(RiskLevel::Medium, profile(5, f64::NAN));
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_from_str_roundtrips_keys() {
        for level in RiskLevel::ALL {
            assert_eq!(level.key().parse::<RiskLevel>().unwrap(), level);
        }
        assert!("extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
