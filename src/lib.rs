//! # LOMS
//!
//! An in-memory logistics and order management service. It holds stock levels per SKU,
//! reserves units when an order is placed, and releases them when the order is paid or
//! cancelled.
//!
//! ## Architecture
//!
//! Both stores are resource actors built on the [`resource_actor`] crate: a Tokio task that
//! exclusively owns its records and handles one request at a time. The stock store and the
//! order store are separate actors, so they never wait on each other.
//!
//! ### 1. The Records ([`model`])
//! Pure data: [`Stock`](model::Stock), [`Order`](model::Order) and the order status
//! transition table [`OrderStatus::on`](model::OrderStatus::on).
//!
//! ### 2. The Stores ([`stock_actor`], [`order_actor`])
//! The [`ActorEntity`](resource_actor::ActorEntity) implementations. Reserve, release and
//! status transitions are actions, so each check-and-mutate is atomic.
//!
//! ### 3. The Interface ([`clients`])
//! [`StockClient`](clients::StockClient) and [`OrderClient`](clients::OrderClient) hide the
//! message passing and turn framework failures into store errors.
//!
//! ### 4. The Lifecycle ([`service`], [`lifecycle`])
//! [`ReservationService`](service::ReservationService) runs the order lifecycle;
//! [`LomsSystem`](lifecycle::LomsSystem) starts, seeds and stops the stores.
//!
//! ### 5. The Edges ([`api`], [`catalog`], [`config`])
//! The axum router, the JSON stock catalog and the clap configuration.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --stock-data data/stock_data.json
//! curl -X POST localhost:50051/loms/stock/info -H 'content-type: application/json' -d '{"sku": 1002}'
//! ```

pub mod api;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod service;
pub mod stock_actor;
