//! Readiness verdict and per-item shortfall rows.

use serde::{Deserialize, Serialize};

use crate::engine::StockpileResult;
use crate::inventory::{CurrentInventory, SupplyItem};

/// Three-state assessment of current inventory against the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Verdict {
    Satisfied,
    Partial,
    #[default]
    Unsatisfied,
}

impl Verdict {
    pub fn from_checks(water_ok: bool, food_ok: bool) -> Self {
        match (water_ok, food_ok) {
            (true, true) => Verdict::Satisfied,
            (true, false) | (false, true) => Verdict::Partial,
            (false, false) => Verdict::Unsatisfied,
        }
    }

    /// Human-readable name for UI display.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Satisfied => "Satisfied (充足)",
            Verdict::Partial => "Partial (一部不足)",
            Verdict::Unsatisfied => "Unsatisfied (不足)",
        }
    }
}

/// The two checks behind a [`Verdict`]. Equality counts as met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessCheck {
    pub water_ok: bool,
    pub food_ok: bool,
}

impl ReadinessCheck {
    pub fn new(inventory: &CurrentInventory, result: &StockpileResult) -> Self {
        Self {
            water_ok: inventory.total_water() >= result.recommended_water_total as f64,
            food_ok: inventory.food() >= result.recommended_food_total as f64,
        }
    }

    pub fn verdict(self) -> Verdict {
        Verdict::from_checks(self.water_ok, self.food_ok)
    }
}

pub fn evaluate(inventory: &CurrentInventory, result: &StockpileResult) -> Verdict {
    ReadinessCheck::new(inventory, result).verdict()
}

/// Current vs. recommended quantity for one supply item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub item: SupplyItem,
    pub current: f64,
    pub recommended: f64,
    /// `recommended - current`, or 0 when the item is met.
    pub shortfall: f64,
    pub is_met: bool,
}

pub fn inventory_rows(inventory: &CurrentInventory, result: &StockpileResult) -> Vec<InventoryRow> {
    SupplyItem::ALL
        .into_iter()
        .map(|item| {
            let current = inventory.get(item);
            let recommended = item.recommended(result);
            InventoryRow {
                item,
                current,
                recommended,
                shortfall: (recommended - current).max(0.0),
                is_met: current >= recommended,
            }
        })
        .collect()
}
