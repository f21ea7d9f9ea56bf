//! Custom actions for the Stock actor.
//!
//! Each action is a check-and-mutate on one [`Stock`](crate::model::Stock) record and runs
//! inside the actor, so no other request on the store can observe or interleave with it.
//! See [`impl ActorEntity for Stock`](crate::model::Stock#impl-ActorEntity-for-Stock).

/// Atomic operations on a single SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// Holds `count` units against the SKU.
    ///
    /// # Errors
    /// Fails with [`StockError::InsufficientStock`](super::StockError::InsufficientStock)
    /// when fewer than `count` units are available, leaving the record unchanged.
    Reserve(u64),
    /// Gives `count` held units back. `reserved` is clamped at zero.
    Release(u64),
}
