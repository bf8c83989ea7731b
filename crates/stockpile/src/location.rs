//! Regions and their severity multipliers.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::MAX_LOCATION_MULTIPLIER;
use crate::error::StockpileError;
use crate::hazard::RiskLevel;

/// Region the facility is located in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LocationKey {
    #[default]
    Tokyo,
    Osaka,
    Sendai,
    Fukuoka,
    Aichi,
}

impl LocationKey {
    pub const ALL: [LocationKey; 5] = [
        LocationKey::Tokyo,
        LocationKey::Osaka,
        LocationKey::Sendai,
        LocationKey::Fukuoka,
        LocationKey::Aichi,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LocationKey::Tokyo => "tokyo",
            LocationKey::Osaka => "osaka",
            LocationKey::Sendai => "sendai",
            LocationKey::Fukuoka => "fukuoka",
            LocationKey::Aichi => "aichi",
        }
    }
}

impl FromStr for LocationKey {
    type Err = StockpileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationKey::ALL
            .into_iter()
            .find(|loc| loc.key() == s)
            .ok_or_else(|| StockpileError::UnknownEnumKey {
                table: "location",
                key: s.to_string(),
            })
    }
}

/// Severity multiplier and display data for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationProfile {
    /// Scales the hazard tier's stockpile days. Valid tables keep it in
    /// `1.0..=MAX_LOCATION_MULTIPLIER`.
    pub multiplier: f64,
    pub display_name: &'static str,
    /// Tier suggested for the region when the user has not picked one.
    pub base_risk: RiskLevel,
}

/// Reference table mapping each [`LocationKey`] to its [`LocationProfile`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationTable {
    profiles: BTreeMap<LocationKey, LocationProfile>,
}

impl LocationTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self::empty()
            .with_profile(LocationKey::Tokyo, profile(1.2, "東京都", RiskLevel::High))
            .with_profile(LocationKey::Osaka, profile(1.1, "大阪府", RiskLevel::Medium))
            .with_profile(LocationKey::Sendai, profile(1.3, "仙台市", RiskLevel::High))
            .with_profile(LocationKey::Fukuoka, profile(1.0, "福岡市", RiskLevel::Medium))
            .with_profile(LocationKey::Aichi, profile(1.15, "愛知県", RiskLevel::High))
    }

    pub fn with_profile(mut self, key: LocationKey, profile: LocationProfile) -> Self {
        self.profiles.insert(key, profile);
        self
    }

    pub fn without(mut self, key: LocationKey) -> Self {
        self.profiles.remove(&key);
        self
    }

    pub fn get(&self, key: LocationKey) -> Result<&LocationProfile, StockpileError> {
        self.profiles
            .get(&key)
            .ok_or_else(|| StockpileError::UnknownEnumKey {
                table: "location",
                key: key.key().to_string(),
            })
    }

    /// Display name, falling back to the raw key for regions missing from the table.
    pub fn display_name(&self, key: LocationKey) -> &'static str {
        self.get(key).map_or(key.key(), |p| p.display_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LocationKey, &LocationProfile)> {
        self.profiles.iter()
    }

    pub fn validate(&self) -> Result<(), StockpileError> {
        for (key, p) in &self.profiles {
            if !(1.0..=MAX_LOCATION_MULTIPLIER).contains(&p.multiplier) {
                return Err(StockpileError::InvalidProfile {
                    table: "location",
                    key: key.key().to_string(),
                    reason: "multiplier must be between 1.0 and 10.0",
                });
            }
        }
        Ok(())
    }
}

fn profile(multiplier: f64, display_name: &'static str, base_risk: RiskLevel) -> LocationProfile {
    LocationProfile {
        multiplier,
        display_name,
        base_risk,
    }
}
