use crate::clients::{OrderClient, StockClient};
use crate::config::SystemConfig;
use crate::model::Stock;
use crate::service::ReservationService;
use crate::stock_actor::StockError;
use thiserror::Error;
use tracing::{error, info};

/// A store actor ended abnormally.
#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// The running stock and order stores plus the service built on them.
pub struct LomsSystem {
    /// Client for the Stock actor
    pub stock_client: StockClient,

    /// Client for the Order actor
    pub order_client: OrderClient,

    service: ReservationService,

    /// Task handles for both actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl LomsSystem {
    /// Spawns both store actors. Must be called inside a Tokio runtime.
    pub fn start(config: SystemConfig) -> Self {
        let (stock_actor, stock_client) = crate::stock_actor::new(config.channel_capacity);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_capacity);

        let stock_handle = tokio::spawn(stock_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        let service =
            ReservationService::new(stock_client.clone(), order_client.clone(), config.policy);
        info!(
            channel_capacity = config.channel_capacity,
            rollback_partial = config.policy.rollback_partial,
            "System started"
        );

        Self {
            stock_client,
            order_client,
            service,
            handles: vec![stock_handle, order_handle],
        }
    }

    /// Stores every catalog record, stopping at the first one the store rejects.
    pub async fn seed(&self, stocks: impl IntoIterator<Item = Stock>) -> Result<usize, StockError> {
        let mut seeded = 0;
        for stock in stocks {
            self.stock_client.set(stock).await?;
            seeded += 1;
        }
        info!(records = seeded, "Stock seeded");
        Ok(seeded)
    }

    /// A handle to the reservation service.
    pub fn service(&self) -> ReservationService {
        self.service.clone()
    }

    /// Drops every client held by the system and waits for both actors to finish.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.stock_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
