//! # Reservation Service
//!
//! The order lifecycle on top of the two stores. The service owns no state: it holds a
//! [`StockClient`] and an [`OrderClient`] and is cheap to clone into every request task.
//!
//! ```text
//! create ──▶ reserve item 1 … item n ──▶ order(awaiting_payment)
//!                    │ missing / short
//!                    └──▶ release items reserved so far ──▶ order(failed)
//!
//! pay    ──▶ transition(Pay)    ──applied──▶ release every item
//! cancel ──▶ transition(Cancel) ──applied──▶ release every item
//! ```
//!
//! No call spans both stores atomically. The order is written only after every stock
//! decision for it has been made, and pay/cancel rely on the order store's guarded
//! transition so that an order's items are released at most once.

pub mod error;

pub use error::*;

use crate::clients::{OrderClient, StockClient};
use crate::model::{Order, OrderCreate, OrderEvent, OrderId, OrderItem, OrderStatus, Sku, UserId};
use crate::order_actor::{OrderError, Transition};
use crate::stock_actor::StockError;
use tracing::{info, instrument, warn};

/// What to do with items already reserved when a later item of the same order fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationPolicy {
    /// Release the items reserved earlier in the attempt before recording the failed order.
    /// When `false`, those units stay reserved.
    pub rollback_partial: bool,
}

/// Rollback is on by default. `rollback_partial: false` leaves earlier items held by the
/// failed order.
impl Default for ReservationPolicy {
    fn default() -> Self {
        Self {
            rollback_partial: true,
        }
    }
}

/// Orchestrates order creation, payment and cancellation against the stock and order stores.
#[derive(Clone)]
pub struct ReservationService {
    stocks: StockClient,
    orders: OrderClient,
    policy: ReservationPolicy,
}

impl ReservationService {
    pub fn new(stocks: StockClient, orders: OrderClient, policy: ReservationPolicy) -> Self {
        Self {
            stocks,
            orders,
            policy,
        }
    }

    pub fn policy(&self) -> ReservationPolicy {
        self.policy
    }

    /// Reserves the items and records the order.
    ///
    /// Returns the new order's id whether the reservation succeeded (`awaiting_payment`) or
    /// not (`failed`).
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub async fn create_order(
        &self,
        user_id: UserId,
        items: Vec<OrderItem>,
    ) -> Result<OrderId, LomsError> {
        validate_items(&items)?;

        let event = self.reserve_items(&items).await?;
        let status = OrderStatus::New.on(event).unwrap_or(OrderStatus::Failed);

        let id = self
            .orders
            .create(OrderCreate {
                user_id,
                status,
                items,
            })
            .await?;
        info!(order_id = %id, %status, "Order created");
        Ok(id)
    }

    /// The stored order, `None` if the id is unknown.
    #[instrument(skip(self))]
    pub async fn order_info(&self, id: OrderId) -> Result<Option<Order>, LomsError> {
        match self.orders.get(id).await {
            Ok(order) => Ok(Some(order)),
            Err(OrderError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Marks an `awaiting_payment` order as payed and releases its items.
    #[instrument(skip(self))]
    pub async fn pay_order(&self, id: OrderId) -> Result<(), LomsError> {
        self.settle(id, OrderEvent::Pay).await
    }

    /// Marks an `awaiting_payment` order as cancelled and releases its items.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<(), LomsError> {
        self.settle(id, OrderEvent::Cancel).await
    }

    /// Units of `sku` that can still be reserved; 0 for an unknown SKU.
    #[instrument(skip(self))]
    pub async fn stocks_info(&self, sku: Sku) -> Result<u64, LomsError> {
        match self.stocks.get(sku).await {
            Ok(level) => Ok(level.available),
            Err(StockError::NotFound(_)) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Reserves every item in list order, stopping at the first one that cannot be reserved.
    async fn reserve_items(&self, items: &[OrderItem]) -> Result<OrderEvent, LomsError> {
        let mut reserved = Vec::with_capacity(items.len());

        for item in items {
            match self.reserve_item(item).await {
                Ok(()) => reserved.push(*item),
                Err(e @ (StockError::NotFound(_) | StockError::InsufficientStock { .. })) => {
                    warn!(sku = %item.sku, count = item.count, error = %e, "Reservation failed");
                    if self.policy.rollback_partial {
                        self.release_items(&reserved).await?;
                    }
                    return Ok(OrderEvent::ReservationFailed);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(OrderEvent::Reserved)
    }

    async fn reserve_item(&self, item: &OrderItem) -> Result<(), StockError> {
        let count = u64::from(item.count);
        let level = self.stocks.get(item.sku).await?;
        if level.available < count {
            return Err(StockError::InsufficientStock {
                sku: item.sku,
                requested: count,
                available: level.available,
            });
        }
        self.stocks.reserve(item.sku, count).await?;
        Ok(())
    }

    /// Releases each item on its own; repeated SKUs are released once per line.
    async fn release_items(&self, items: &[OrderItem]) -> Result<(), LomsError> {
        for item in items {
            match self.stocks.release(item.sku, u64::from(item.count)).await {
                Ok(_) => {}
                Err(StockError::NotFound(sku)) => {
                    warn!(%sku, "Release skipped, SKU not in stock store");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Applies `event` to the order, then releases its items.
    ///
    /// The status is written first: the guarded transition lets exactly one concurrent
    /// pay or cancel through, so an order's items are released at most once. If the stock
    /// store fails partway through the release, the order stays in its terminal status
    /// while the unreleased units remain reserved, and the failure is returned as
    /// [`LomsError::Unavailable`] without a retry.
    async fn settle(&self, id: OrderId, event: OrderEvent) -> Result<(), LomsError> {
        match self.orders.transition(id, event).await {
            Ok(Transition::Applied(order)) => {
                self.release_items(&order.items).await?;
                info!(order_id = %id, status = %order.status, "Order settled");
                Ok(())
            }
            Ok(Transition::Ignored(status)) => {
                warn!(order_id = %id, ?event, %status, "Transition ignored");
                Ok(())
            }
            Err(OrderError::NotFound(_)) => {
                warn!(order_id = %id, ?event, "Transition ignored, order not found");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn validate_items(items: &[OrderItem]) -> Result<(), LomsError> {
    if items.is_empty() {
        return Err(LomsError::InvalidArgument("order has no items".into()));
    }
    if let Some(item) = items.iter().find(|item| item.count == 0) {
        return Err(LomsError::InvalidArgument(format!(
            "item count must be positive (sku {})",
            item.sku
        )));
    }
    Ok(())
}
