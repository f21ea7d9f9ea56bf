use crate::model::Sku;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of the user placing an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an order is in its lifecycle.
///
/// ```text
/// new ──Reserved──────────▶ awaiting_payment ──Pay────▶ payed
///  │                               └─────────Cancel──▶ cancelled
///  └──ReservationFailed───▶ failed
/// ```
///
/// `new` only exists while an order is being built and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    AwaitingPayment,
    Failed,
    Payed,
    Cancelled,
}

/// Something that happened to an order and may move it to another status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEvent {
    /// Every item of the order was reserved.
    Reserved,
    /// At least one item could not be reserved.
    ReservationFailed,
    Pay,
    Cancel,
}

impl OrderStatus {
    /// The transition table. `None` means the event does not apply in this status.
    pub fn on(self, event: OrderEvent) -> Option<OrderStatus> {
        use OrderEvent::*;
        use OrderStatus::*;

        match (self, event) {
            (New, Reserved) => Some(AwaitingPayment),
            (New, ReservationFailed) => Some(Failed),
            (AwaitingPayment, Pay) => Some(Payed),
            (AwaitingPayment, Cancel) => Some(Cancelled),
            (New, Pay | Cancel)
            | (AwaitingPayment, Reserved | ReservationFailed)
            | (Failed | Payed | Cancelled, _) => None,
        }
    }

    /// True when the order's items are currently held against stock.
    pub fn holds_reservation(self) -> bool {
        self == OrderStatus::AwaitingPayment
    }

    /// True when no further transition is defined.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Failed | OrderStatus::Payed | OrderStatus::Cancelled
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::AwaitingPayment => "awaiting_payment",
            OrderStatus::Failed => "failed",
            OrderStatus::Payed => "payed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order. The same SKU may appear on several lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub sku: Sku,
    pub count: u32,
}

impl OrderItem {
    pub fn new(sku: impl Into<Sku>, count: u32) -> Self {
        Self {
            sku: sku.into(),
            count,
        }
    }
}

/// A customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor)
/// that assigns sequential ids.
///
/// See [`crate::order_actor`] for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Guarded status transitions ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds a stored order from its creation payload, stamping both timestamps with `now`.
    pub fn new(id: OrderId, params: OrderCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: params.user_id,
            status: params.status,
            items: params.items,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating a new order.
///
/// The status is decided before the order is handed to the store, once every stock
/// decision for its items has been made.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}
