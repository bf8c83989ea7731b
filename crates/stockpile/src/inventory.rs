//! Current on-hand quantities, as entered by the user.
//!
//! The engine never holds one of these; it only receives snapshots.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::StockpileResult;

/// One row of the inventory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupplyItem {
    DrinkingWater,
    LifeWater,
    Food,
    EmergencyKit,
    Light,
    Blanket,
}

impl SupplyItem {
    pub const ALL: [SupplyItem; 6] = [
        SupplyItem::DrinkingWater,
        SupplyItem::LifeWater,
        SupplyItem::Food,
        SupplyItem::EmergencyKit,
        SupplyItem::Light,
        SupplyItem::Blanket,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SupplyItem::DrinkingWater => "Drinking water (飲料水)",
            SupplyItem::LifeWater => "Life/emergency water (生活用水)",
            SupplyItem::Food => "Food (食料)",
            SupplyItem::EmergencyKit => "Emergency kits (救急キット)",
            SupplyItem::Light => "Lights (照明)",
            SupplyItem::Blanket => "Blankets (毛布)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SupplyItem::DrinkingWater | SupplyItem::LifeWater => "L",
            SupplyItem::Food => "meals",
            SupplyItem::EmergencyKit | SupplyItem::Light | SupplyItem::Blanket => "pcs",
        }
    }

    /// Recommended quantity of this item in `result`.
    pub fn recommended(self, result: &StockpileResult) -> f64 {
        match self {
            SupplyItem::DrinkingWater => result.recommended_drinking_water as f64,
            SupplyItem::LifeWater => result.recommended_life_water as f64,
            SupplyItem::Food => result.recommended_food_total as f64,
            SupplyItem::EmergencyKit => result.emergency_kits as f64,
            SupplyItem::Light => result.lights as f64,
            SupplyItem::Blanket => result.blankets as f64,
        }
    }
}

/// Quantities currently on hand. Every field is non-negative; the setters
/// clamp negative and NaN input to zero.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentInventory {
    water: f64,
    life_water: f64,
    food: f64,
    kits: f64,
    lights: f64,
    blankets: f64,
}

impl CurrentInventory {
    /// Snapshot holding exactly the recommended quantities.
    pub fn stocked_to(result: &StockpileResult) -> Self {
        let mut inv = Self::default();
        for item in SupplyItem::ALL {
            inv.set(item, item.recommended(result));
        }
        inv
    }

    pub fn get(&self, item: SupplyItem) -> f64 {
        match item {
            SupplyItem::DrinkingWater => self.water,
            SupplyItem::LifeWater => self.life_water,
            SupplyItem::Food => self.food,
            SupplyItem::EmergencyKit => self.kits,
            SupplyItem::Light => self.lights,
            SupplyItem::Blanket => self.blankets,
        }
    }

    pub fn set(&mut self, item: SupplyItem, value: f64) {
        let value = non_negative(value);
        match item {
            SupplyItem::DrinkingWater => self.water = value,
            SupplyItem::LifeWater => self.life_water = value,
            SupplyItem::Food => self.food = value,
            SupplyItem::EmergencyKit => self.kits = value,
            SupplyItem::Light => self.lights = value,
            SupplyItem::Blanket => self.blankets = value,
        }
    }

    pub fn water(&self) -> f64 {
        self.water
    }

    pub fn life_water(&self) -> f64 {
        self.life_water
    }

    pub fn food(&self) -> f64 {
        self.food
    }

    pub fn set_water(&mut self, value: f64) {
        self.set(SupplyItem::DrinkingWater, value);
    }

    pub fn set_life_water(&mut self, value: f64) {
        self.set(SupplyItem::LifeWater, value);
    }

    pub fn set_food(&mut self, value: f64) {
        self.set(SupplyItem::Food, value);
    }

    pub fn set_kits(&mut self, value: f64) {
        self.set(SupplyItem::EmergencyKit, value);
    }

    pub fn set_lights(&mut self, value: f64) {
        self.set(SupplyItem::Light, value);
    }

    pub fn set_blankets(&mut self, value: f64) {
        self.set(SupplyItem::Blanket, value);
    }

    /// Drinking plus life water.
    pub fn total_water(&self) -> f64 {
        self.water + self.life_water
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}
