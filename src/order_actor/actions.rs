//! Custom actions for the Order actor.

use crate::model::{Order, OrderEvent, OrderStatus};

/// Atomic operations on a single order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Moves the order along the transition table if `event` applies to its current status.
    ///
    /// The status check and the write happen in one step, so two concurrent transitions on
    /// the same order can never both start from the same status.
    Transition(OrderEvent),
}

/// Outcome of [`OrderAction::Transition`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The event applied; carries the order as stored afterwards.
    Applied(Order),
    /// The event does not apply in this status; nothing was written.
    Ignored(OrderStatus),
}
