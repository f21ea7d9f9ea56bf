use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stock Keeping Unit, the product identifier used for inventory lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(pub u32);

impl From<u32> for Sku {
    fn from(sku: u32) -> Self {
        Self(sku)
    }
}

impl Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Total and reserved units of one SKU.
///
/// `reserved <= total_count` holds for every record held by the stock store.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be owned by a [`ResourceActor`](resource_actor::ResourceActor).
/// See [`crate::stock_actor`] for the reserve and release actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub sku: Sku,
    pub total_count: u64,
    pub reserved: u64,
}

impl Stock {
    pub fn new(sku: impl Into<Sku>, total_count: u64, reserved: u64) -> Self {
        Self {
            sku: sku.into(),
            total_count,
            reserved,
        }
    }

    /// Units that can still be reserved.
    pub fn available(&self) -> u64 {
        self.total_count.saturating_sub(self.reserved)
    }

    /// A read-only snapshot of this record.
    pub fn level(&self) -> StockLevel {
        StockLevel {
            sku: self.sku,
            available: self.available(),
            total_count: self.total_count,
            reserved: self.reserved,
        }
    }
}

/// What the stock store reports for a SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub sku: Sku,
    pub available: u64,
    pub total_count: u64,
    pub reserved: u64,
}
