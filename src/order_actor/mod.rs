//! Order-specific resource logic: sequential ids and guarded status transitions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client. Ids start at 1 and are never reused.
pub fn new(channel_capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::with_sequence(channel_capacity);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
