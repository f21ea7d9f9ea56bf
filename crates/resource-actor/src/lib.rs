//! # Resource Actor
//!
//! Building blocks for in-memory stores that are safe under concurrent access without locks.
//! Each store is an **actor**: a Tokio task that exclusively owns a map of records and
//! processes requests sequentially, reached through a cheap, cloneable handle.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type and the operations that must be atomic
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and ownership of the records
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests are processed **sequentially** within an actor, so every
//!   [`ActorEntity::handle_action`] is a linearizable check-and-mutate
//! - Different actors run in **parallel** and never share state
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_actor::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Bin { id: u32, units: u32 }
//!
//! #[derive(Debug)]
//! enum BinAction { Take(u32) }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("bin {0} is short")]
//! struct BinError(u32);
//!
//! #[async_trait]
//! impl ActorEntity for Bin {
//!     type Id = u32;
//!     type Create = std::convert::Infallible;
//!     type Update = ();
//!     type Action = BinAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = BinError;
//!
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(_: u32, params: Self::Create) -> Result<Self, Self::Error> { match params {} }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, action: BinAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             BinAction::Take(n) if n <= self.units => { self.units -= n; Ok(self.units) }
//!             BinAction::Take(_) => Err(BinError(self.id)),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Bin>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     client.put(Bin { id: 1, units: 5 }).await.unwrap();
//!     assert_eq!(client.perform_action(1, BinAction::Take(3)).await.unwrap(), 2);
//!     assert!(client.perform_action(1, BinAction::Take(3)).await.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`], which answers requests from scripted
//! expectations so that code built on a `ResourceClient` can be tested without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
