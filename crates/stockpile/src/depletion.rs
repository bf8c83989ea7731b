//! Day-by-day depletion projection and constant daily consumption bars.

use serde::{Deserialize, Serialize};

use crate::config::STOCK_SHORTFALL_EPSILON;
use crate::engine::StockpileResult;
use crate::inventory::CurrentInventory;

/// Remaining stock at the start of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepletionPoint {
    /// 1-based day index.
    pub day: u32,
    pub water_remaining: f64,
    pub food_remaining: f64,
}

/// `stockpile_days + 1` points, non-increasing and floored at zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DepletionSeries {
    pub points: Vec<DepletionPoint>,
}

impl DepletionSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DepletionPoint> {
        self.points.iter()
    }

    pub fn water(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.water_remaining as f32).collect()
    }

    pub fn food(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.food_remaining as f32).collect()
    }

    /// First day whose opening stock cannot cover that day's consumption.
    ///
    /// `None` when the stock lasts through the final day of the period, which
    /// includes stock that hits zero exactly at the end and a zero requirement.
    pub fn days_of_cover(&self, result: &StockpileResult) -> Option<u32> {
        let short = |remaining: f64, daily: f64| {
            daily > 0.0 && remaining + STOCK_SHORTFALL_EPSILON < daily
        };
        // The last point is the stock left after the period; nothing is drawn from it.
        let last = self.points.len().checked_sub(1)?;
        self.points[..last]
            .iter()
            .find(|p| {
                short(p.water_remaining, result.daily_water)
                    || short(p.food_remaining, result.daily_food)
            })
            .map(|p| p.day)
    }
}

/// Project remaining water and food assuming the recommended daily rates.
///
/// Point `i` (0-based) is day `i + 1` and holds the stock left after `i`
/// days of consumption, so the first point is the current inventory.
pub fn project(result: &StockpileResult, inventory: &CurrentInventory) -> DepletionSeries {
    let start_water = inventory.total_water();
    let start_food = inventory.food();

    let points = (0..=result.stockpile_days)
        .map(|i| {
            let elapsed = f64::from(i);
            DepletionPoint {
                day: i + 1,
                water_remaining: (start_water - result.daily_water * elapsed).max(0.0),
                food_remaining: (start_food - result.daily_food * elapsed).max(0.0),
            }
        })
        .collect();

    DepletionSeries { points }
}

/// One bar of the daily consumption chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyConsumption {
    pub day: u32,
    pub water: f64,
    pub food: f64,
}

/// Constant consumption for each day of the stockpile period.
pub fn daily_consumption(result: &StockpileResult) -> Vec<DailyConsumption> {
    (1..=result.stockpile_days)
        .map(|day| DailyConsumption {
            day,
            water: result.daily_water,
            food: result.daily_food,
        })
        .collect()
}
