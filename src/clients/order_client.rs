use crate::model::{Order, OrderCreate, OrderEvent, OrderId};
use crate::order_actor::{OrderAction, OrderError, Transition};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores a new order and returns the id the store assigned to it.
    #[instrument(skip(self, order), fields(user_id = %order.user_id, status = %order.status))]
    pub async fn create(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "create called");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Order, OrderError> {
        self.find(id).await?.ok_or(OrderError::NotFound(id))
    }

    /// Replaces the stored order with the same id. Unknown ids are ignored.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn update(&self, order: Order) -> Result<(), OrderError> {
        match self.inner.update(order.id, order).await {
            Ok(_) => Ok(()),
            Err(FrameworkError::NotFound(id)) => {
                info!(order_id = %id, "Update of unknown order ignored");
                Ok(())
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Applies `event` to the order's status if the transition table allows it.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        id: OrderId,
        event: OrderEvent,
    ) -> Result<Transition, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::Transition(event))
            .await
        {
            Ok(outcome) => Ok(outcome),
            Err(FrameworkError::NotFound(_)) => Err(OrderError::NotFound(id)),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::EntityError(e) => match e.downcast::<OrderError>() {
                Ok(e) => *e,
                Err(other) => OrderError::Unavailable(other.to_string()),
            },
            other => OrderError::Unavailable(other.to_string()),
        }
    }
}
