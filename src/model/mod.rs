//! Pure data structures; [`Stock`] and [`Order`] implement the
//! [`ActorEntity`](resource_actor::ActorEntity) trait.

pub mod order;
pub mod stock;

pub use order::*;
pub use stock::*;
