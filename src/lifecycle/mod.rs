//! # System Lifecycle
//!
//! Starting, seeding and stopping the two store actors.
//!
//! [`LomsSystem::start`] creates the stock and order actors, spawns each run loop on its
//! own task and builds the [`ReservationService`](crate::service::ReservationService) from
//! their clients. Neither store depends on the other, so both run with `Context = ()`.
//!
//! ## Graceful Shutdown
//!
//! Each actor's loop ends when the last clone of its client is dropped:
//!
//! 1. **Drop all clients** - the system's own handles and the service's
//! 2. **Actors drain** - requests already queued are still answered
//! 3. **Await completion** - a panicked actor is reported as an error
//!
//! Clones handed out through [`LomsSystem::service`] keep the stores alive, so callers must
//! drop them (for example by stopping the HTTP server) before `shutdown` can finish.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the global subscriber; see the [`tracing`](self::tracing) module.

pub mod system;
pub mod tracing;

pub use system::*;
pub use self::tracing::*;
