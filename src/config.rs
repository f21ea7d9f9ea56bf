//! Command-line and environment configuration.

use crate::service::ReservationPolicy;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "loms", about = "Logistics and order management service", long_about = None)]
pub struct Config {
    /// Address the HTTP transport binds to.
    #[arg(long, env = "LOMS_LISTEN_ADDR", default_value = "0.0.0.0:50051")]
    pub listen_addr: SocketAddr,

    /// JSON catalog used to seed the stock store.
    #[arg(long, env = "LOMS_STOCK_DATA", default_value = "data/stock_data.json")]
    pub stock_data: PathBuf,

    /// Capacity of each store's request channel. Must be at least 1.
    #[arg(
        long,
        env = "LOMS_CHANNEL_CAPACITY",
        default_value_t = 32,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub channel_capacity: usize,

    /// Deadline for a single HTTP request, in milliseconds.
    #[arg(long, env = "LOMS_REQUEST_TIMEOUT_MS", default_value_t = 5000)]
    pub request_timeout_ms: u64,

    /// Release the earlier items of an order when a later item cannot be reserved.
    #[arg(
        long,
        env = "LOMS_ROLLBACK_PARTIAL_RESERVATIONS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub rollback_partial_reservations: bool,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// The part of the configuration the actor system needs.
    pub fn system(&self) -> SystemConfig {
        SystemConfig {
            channel_capacity: self.channel_capacity,
            policy: ReservationPolicy {
                rollback_partial: self.rollback_partial_reservations,
            },
        }
    }
}

/// Settings for [`LomsSystem::start`](crate::lifecycle::LomsSystem::start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    pub channel_capacity: usize,
    pub policy: ReservationPolicy,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            policy: ReservationPolicy::default(),
        }
    }
}
