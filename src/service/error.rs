//! The error type returned by [`ReservationService`](super::ReservationService).

use crate::order_actor::OrderError;
use crate::stock_actor::StockError;
use thiserror::Error;

/// Failures of a service call.
///
/// Business outcomes (missing SKU, insufficient stock, an order that cannot be paid) never
/// show up here; they are ordinary results. What remains is a malformed request or a store
/// that cannot answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LomsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{store} store unavailable: {reason}")]
    Unavailable { store: &'static str, reason: String },
}

impl From<StockError> for LomsError {
    fn from(e: StockError) -> Self {
        let reason = match e {
            StockError::Unavailable(reason) => reason,
            other => other.to_string(),
        };
        LomsError::Unavailable {
            store: "stock",
            reason,
        }
    }
}

impl From<OrderError> for LomsError {
    fn from(e: OrderError) -> Self {
        let reason = match e {
            OrderError::Unavailable(reason) => reason,
            other => other.to_string(),
        };
        LomsError::Unavailable {
            store: "order",
            reason,
        }
    }
}
