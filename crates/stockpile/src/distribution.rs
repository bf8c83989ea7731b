//! Split of the total water stock by intended use (pie chart data).

use serde::{Deserialize, Serialize};

use crate::engine::StockpileResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WaterUse {
    Drinking,
    Life,
    Emergency,
}

impl WaterUse {
    pub fn label(self) -> &'static str {
        match self {
            WaterUse::Drinking => "飲料水",
            WaterUse::Life => "生活用水",
            WaterUse::Emergency => "緊急用水",
        }
    }

    pub fn color(self) -> (u8, u8, u8) {
        match self {
            WaterUse::Drinking => (0x3b, 0x82, 0xf6),
            WaterUse::Life => (0x06, 0xb6, 0xd4),
            WaterUse::Emergency => (0x0e, 0xa5, 0xe9),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterShare {
    pub usage: WaterUse,
    pub volume: u64,
    /// Share of the total, 0.0 when the total is zero.
    pub fraction: f64,
}

/// Drinking (70%), life (20%) and emergency (10%) water.
///
/// Life and emergency together are exactly `recommended_life_water`;
/// emergency takes a third of it rounded up.
pub fn water_breakdown(result: &StockpileResult) -> [WaterShare; 3] {
    let emergency = result.recommended_life_water.div_ceil(3);
    let life = result.recommended_life_water - emergency;
    let total = result.recommended_water_total;
    let share = |usage, volume: u64| WaterShare {
        usage,
        volume,
        fraction: if total == 0 {
            0.0
        } else {
            volume as f64 / total as f64
        },
    };
    [
        share(WaterUse::Drinking, result.recommended_drinking_water),
        share(WaterUse::Life, life),
        share(WaterUse::Emergency, emergency),
    ]
}
