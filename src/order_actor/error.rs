//! Error types for the Order actor.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// No order exists with this id.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The order store cannot serve requests.
    #[error("Order store unavailable: {0}")]
    Unavailable(String),
}
