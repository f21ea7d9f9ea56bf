//! Error types for the Stock actor.

use crate::model::Sku;
use thiserror::Error;

/// Errors that can occur during stock operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StockError {
    /// No record exists for the SKU.
    #[error("Stock not found: {0}")]
    NotFound(Sku),

    /// The requested quantity exceeds what is still available.
    #[error("Insufficient stock for sku {sku}: requested {requested}, available {available}")]
    InsufficientStock {
        sku: Sku,
        requested: u64,
        available: u64,
    },

    /// A record would break `reserved <= total_count`.
    #[error("Invalid stock level for sku {sku}: reserved {reserved} exceeds total {total_count}")]
    InvalidLevel {
        sku: Sku,
        total_count: u64,
        reserved: u64,
    },

    /// The stock store cannot serve requests.
    #[error("Stock store unavailable: {0}")]
    Unavailable(String),
}
