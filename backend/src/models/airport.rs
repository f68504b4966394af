//! Airport inventory model
//!
//! Per-class kit stock and capacity, recent trend and flow history.

use super::cabin::{CabinClass, ClassMap};
use serde::{Deserialize, Serialize};

/// Stock below this share of capacity needs rebuilding
pub const REBUILD_BUFFER_RATIO: f64 = 0.35;

/// Stock above this share of capacity risks overstock
pub const OVERSTOCK_RATIO: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirportType {
    Hub,
    Outstation,
}

/// Stock level of one class relative to capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockHealth {
    /// Stock ratio below `REBUILD_BUFFER_RATIO`
    RebuildBuffer,
    Balanced,
    /// Stock ratio above `OVERSTOCK_RATIO`
    Overstock,
}

impl StockHealth {
    /// Classify a stock level against capacity
    ///
    /// Zero capacity means nothing can be held, which is treated as an
    /// empty buffer.
    pub fn classify(stock: i64, capacity: i64) -> Self {
        if capacity <= 0 {
            return StockHealth::RebuildBuffer;
        }
        let ratio = stock as f64 / capacity as f64;
        if ratio < REBUILD_BUFFER_RATIO {
            StockHealth::RebuildBuffer
        } else if ratio > OVERSTOCK_RATIO {
            StockHealth::Overstock
        } else {
            StockHealth::Balanced
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub airport_type: AirportType,
    pub capacity: ClassMap<i64>,
    pub stock: ClassMap<i64>,
    /// Total stock over recent periods, oldest first
    pub trend: Vec<i64>,
    pub inbound: Vec<i64>,
    pub outbound: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Airport {
    pub fn total_stock(&self) -> i64 {
        self.stock.iter().map(|(_, v)| *v).sum()
    }

    pub fn total_capacity(&self) -> i64 {
        self.capacity.iter().map(|(_, v)| *v).sum()
    }

    pub fn stock_health(&self, class: CabinClass) -> StockHealth {
        StockHealth::classify(self.stock[class], self.capacity[class])
    }

    /// Health of every class
    pub fn health(&self) -> ClassMap<StockHealth> {
        ClassMap::from_fn(|class| self.stock_health(class))
    }

    /// Inbound minus outbound over the recorded history
    pub fn net_flow(&self) -> i64 {
        self.inbound.iter().sum::<i64>() - self.outbound.iter().sum::<i64>()
    }
}
