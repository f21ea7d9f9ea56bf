//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders live in a sequenced store: the actor hands out ids 1, 2, 3, … on `Create`.
//! `Update` replaces the stored record wholesale and `Transition` drives the status
//! through [`OrderStatus::on`](crate::model::OrderStatus::on).

use super::{OrderAction, OrderError, Transition};
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Order;
    type Action = OrderAction;
    type ActionResult = Transition;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> OrderId {
        self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::new(id, params, Utc::now()))
    }

    /// Replaces every field except the id, which stays the key the record is stored under.
    async fn on_update(&mut self, update: Order, _ctx: &()) -> Result<(), OrderError> {
        *self = Order {
            id: self.id,
            ..update
        };
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<Transition, OrderError> {
        match action {
            OrderAction::Transition(event) => match self.status.on(event) {
                Some(next) => {
                    self.status = next;
                    self.updated_at = Utc::now();
                    Ok(Transition::Applied(self.clone()))
                }
                None => Ok(Transition::Ignored(self.status)),
            },
        }
    }
}
