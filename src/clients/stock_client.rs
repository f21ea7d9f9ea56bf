use crate::model::{Sku, Stock, StockLevel};
use crate::stock_actor::{StockAction, StockError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Stock actor.
#[derive(Clone)]
pub struct StockClient {
    inner: ResourceClient<Stock>,
}

impl StockClient {
    pub fn new(inner: ResourceClient<Stock>) -> Self {
        Self { inner }
    }

    /// Current level of a SKU.
    #[instrument(skip(self))]
    pub async fn get(&self, sku: Sku) -> Result<StockLevel, StockError> {
        self.find(sku)
            .await?
            .map(|stock| stock.level())
            .ok_or(StockError::NotFound(sku))
    }

    /// Holds `count` units of `sku`, or fails without touching the record.
    #[instrument(skip(self))]
    pub async fn reserve(&self, sku: Sku, count: u64) -> Result<StockLevel, StockError> {
        self.act(sku, StockAction::Reserve(count)).await
    }

    /// Gives back `count` units of `sku`.
    #[instrument(skip(self))]
    pub async fn release(&self, sku: Sku, count: u64) -> Result<StockLevel, StockError> {
        self.act(sku, StockAction::Release(count)).await
    }

    /// Stores `stock` wholesale, replacing any record for the same SKU.
    #[instrument(skip(self), fields(sku = %stock.sku))]
    pub async fn set(&self, stock: Stock) -> Result<(), StockError> {
        if stock.reserved > stock.total_count {
            return Err(StockError::InvalidLevel {
                sku: stock.sku,
                total_count: stock.total_count,
                reserved: stock.reserved,
            });
        }
        debug!(?stock, "Sending request");
        self.inner.put(stock).await.map_err(Self::map_error)?;
        Ok(())
    }

    async fn act(&self, sku: Sku, action: StockAction) -> Result<StockLevel, StockError> {
        debug!(?action, "Sending request");
        match self.inner.perform_action(sku, action).await {
            Ok(stock) => Ok(stock.level()),
            Err(FrameworkError::NotFound(_)) => Err(StockError::NotFound(sku)),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Stock> for StockClient {
    type Error = StockError;

    fn inner(&self) -> &ResourceClient<Stock> {
        &self.inner
    }

    /// Recovers the [`StockError`] raised inside the actor; every other failure means the
    /// store itself is unusable.
    fn map_error(e: FrameworkError) -> StockError {
        match e {
            FrameworkError::EntityError(e) => match e.downcast::<StockError>() {
                Ok(e) => *e,
                Err(other) => StockError::Unavailable(other.to_string()),
            },
            other => StockError::Unavailable(other.to_string()),
        }
    }
}
