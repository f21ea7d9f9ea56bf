//! # ActorClient Trait
//!
//! A common interface for typed store clients that wrap a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for typed store clients to inherit the standard lookup.
///
/// A typed client owns a [`ResourceClient`] and translates [`FrameworkError`] into its own
/// error type once, in [`ActorClient::map_error`]; `find` is then provided for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Stock> for StockClient {
///     type Error = StockError;
///
///     fn inner(&self) -> &ResourceClient<Stock> { &self.inner }
///     fn map_error(e: FrameworkError) -> StockError { /* ... */ }
/// }
///
/// let maybe_stock = stock_client.find(Sku(1)).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by key, `None` when it does not exist.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
