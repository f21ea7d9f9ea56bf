//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every record type (Stock, Order, …) implements to be
//! owned by a generic [`ResourceActor`](crate::ResourceActor). It fixes the associated types for
//! keys, payloads, actions, context and errors, and exposes the hooks the actor calls while
//! processing requests.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after construction and before the record is stored.
//!
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Keys
/// Every entity knows its own key ([`ActorEntity::id`]). This is what lets the actor
/// accept whole records through `Put` (seeding, wholesale replacement) in addition to
/// `Create`, where the actor assigns the key itself.
///
/// # Async & Context
/// Hooks are `async` so they can talk to other actors. The `Context` associated type is
/// injected into every hook when the actor is started with `run(context)`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique key of this entity (e.g. a SKU or an order number).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The payload required to create a new record when the actor assigns the key.
    type Create: Send + Sync + Debug;

    /// The payload applied to an existing record by `Update`.
    type Update: Send + Sync + Debug;

    /// Record-specific operations that must run atomically (e.g. `Reserve`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// Errors returned from hooks travel back to the caller boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError); typed clients
    /// recover them with `downcast`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key under which this record is stored.
    fn id(&self) -> Self::Id;

    /// Construct the full entity from the assigned key and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    ///
    /// The actor processes one request at a time, so the whole body of this method is
    /// atomic with respect to every other request on the same store. If it returns an
    /// error it must leave `self` unchanged.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
