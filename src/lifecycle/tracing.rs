//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG` (default `info`). Module paths are hidden; the actors tag every line with
//! `entity_type` instead.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per store operation
//! RUST_LOG=debug cargo run     # request payloads as well
//! RUST_LOG=loms=debug,tower_http=debug cargo run
//! ```
//!
//! A successful create then a pay, at `info`:
//!
//! ```text
//! INFO Action ok entity_type="Stock" id=1
//! INFO Created entity_type="Order" id=1 size=1
//! INFO create_order: Order created order_id=1 status=awaiting_payment
//! INFO Action ok entity_type="Order" id=1
//! INFO Action ok entity_type="Stock" id=1
//! INFO pay_order: Order settled order_id=1 status=payed
//! ```
//!
//! Ignored transitions and failed reservations are logged at `warn`.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
