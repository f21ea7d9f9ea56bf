//! Stock-specific resource logic: atomic reserve and release of units per SKU.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::StockClient;
use crate::model::Stock;
use resource_actor::ResourceActor;

/// Creates a new Stock actor and its client. Records are keyed by SKU.
pub fn new(channel_capacity: usize) -> (ResourceActor<Stock>, StockClient) {
    let (actor, generic_client) = ResourceActor::new(channel_capacity);
    let client = StockClient::new(generic_client);

    (actor, client)
}
