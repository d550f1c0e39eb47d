use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::cart::{sequential_order_ids, CartReconciler, OrderIdFn};
use crate::clients::CatalogClient;
use crate::domain::Product;
use super::error::AppError;

/// The main application system that owns the catalog actor.
///
/// Responsible for starting the actor, handing out sessions, and shutdown.
pub struct ShopSystem {
    pub catalog_client: CatalogClient,
    next_order_id: OrderIdFn,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    pub fn new(seed: Vec<Product>, mailbox_capacity: usize) -> Self {
        info!(products = seed.len(), mailbox_capacity, "Starting catalog");
        let (catalog_actor, catalog_resource_client) = ResourceActor::<Product>::new(mailbox_capacity, seed);
        let catalog_client = CatalogClient::new(catalog_resource_client);
        let catalog_handle = tokio::spawn(catalog_actor.run());

        Self {
            catalog_client,
            next_order_id: sequential_order_ids(),
            handles: vec![catalog_handle],
        }
    }

    /// Starts a session with its own empty cart. Receipt numbers are shared
    /// across sessions.
    pub fn open_session(&self) -> CartReconciler {
        CartReconciler::new(self.catalog_client.clone(), self.next_order_id.clone())
    }

    /// Waits for the catalog actor to stop. Every session must be dropped
    /// first, or its catalog handle keeps the actor alive.
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(AppError::ActorTask(e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
