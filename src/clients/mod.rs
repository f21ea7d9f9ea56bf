//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).

pub mod order_client;
pub mod stock_client;

pub use order_client::*;
pub use stock_client::*;
