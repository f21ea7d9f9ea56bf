//! [`ActorEntity`] implementation for [`Stock`].
//!
//! Stock records are keyed by their SKU and enter the store through `Put`; the store never
//! assigns keys, so the create payload is uninhabited.

use super::{StockAction, StockError};
use crate::model::{Sku, Stock};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Stock {
    type Id = Sku;
    type Create = Infallible;
    type Update = Infallible;
    type Action = StockAction;
    type ActionResult = Stock;
    type Context = ();
    type Error = StockError;

    fn id(&self) -> Sku {
        self.sku
    }

    fn from_create_params(_sku: Sku, params: Infallible) -> Result<Self, StockError> {
        match params {}
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), StockError> {
        match update {}
    }

    /// Applies a reserve or release and returns the record as it is afterwards.
    async fn handle_action(&mut self, action: StockAction, _ctx: &()) -> Result<Stock, StockError> {
        match action {
            StockAction::Reserve(count) => {
                let available = self.available();
                if available < count {
                    return Err(StockError::InsufficientStock {
                        sku: self.sku,
                        requested: count,
                        available,
                    });
                }
                self.reserved += count;
            }
            StockAction::Release(count) => {
                self.reserved = self.reserved.saturating_sub(count);
            }
        }
        Ok(self.clone())
    }
}
