use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::catalog_actor::{CatalogError, ProductAction, ProductActionResult};
use crate::domain::{Product, ProductId};

/// Client for interacting with the catalog actor.
///
/// Cheap to clone; every clone talks to the same catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(CatalogClient, Product, CatalogError, product);

impl CatalogClient {
    /// Looks a product up, treating absence as an error.
    pub async fn require_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_product(id).await?.ok_or(CatalogError::NotFound(id))
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, CatalogError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::CheckStock).await? {
            ProductActionResult::StockLevel(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn reduce_stock(&self, id: ProductId, quantity: u32) -> Result<u32, CatalogError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::ReduceStock(quantity)).await {
            Ok(ProductActionResult::Reduced { remaining }) => Ok(remaining),
            Ok(other) => Err(unexpected(other)),
            Err(e) => {
                let e = CatalogError::from(e);
                debug!(error = %e, "Stock reduction rejected");
                Err(e)
            }
        }
    }

    /// Reduces stock for every line at once. Either all reductions apply or none do.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn reduce_stock_batch(&self, lines: &[(ProductId, u32)]) -> Result<(), CatalogError> {
        debug!("Sending request");
        let actions = lines
            .iter()
            .map(|&(id, quantity)| (id, ProductAction::ReduceStock(quantity)))
            .collect();
        match self.inner.perform_batch(actions).await {
            Ok(_) => Ok(()),
            Err(e) => {
                let e = CatalogError::from(e);
                debug!(error = %e, "Batch stock reduction rejected");
                Err(e)
            }
        }
    }
}

fn unexpected(result: ProductActionResult) -> CatalogError {
    CatalogError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use crate::domain::default_catalog;

    fn spawn_catalog() -> CatalogClient {
        let (actor, inner) = ResourceActor::new(8, default_catalog());
        tokio::spawn(actor.run());
        CatalogClient::new(inner)
    }

    #[tokio::test]
    async fn test_lookup_and_listing() {
        let catalog = spawn_catalog();

        let keyboard = catalog.require_product(103).await.unwrap();
        assert_eq!(keyboard.name, "Mechanical Keyboard");
        assert_eq!(catalog.require_product(999).await, Err(CatalogError::NotFound(999)));

        let ids: Vec<ProductId> = catalog.list_products().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![101, 102, 103, 104, 105]);
    }

    #[tokio::test]
    async fn test_reduce_stock_checks_remaining_stock() {
        let catalog = spawn_catalog();

        assert_eq!(catalog.reduce_stock(104, 2).await, Ok(1));
        assert_eq!(
            catalog.reduce_stock(104, 2).await,
            Err(CatalogError::InvalidState { product_id: 104, requested: 2, available: 1 })
        );
        assert_eq!(catalog.check_stock(104).await, Ok(1));
    }

    #[tokio::test]
    async fn test_batch_reduction_is_all_or_nothing() {
        let catalog = spawn_catalog();

        let result = catalog.reduce_stock_batch(&[(101, 2), (104, 4)]).await;
        assert_eq!(
            result,
            Err(CatalogError::InvalidState { product_id: 104, requested: 4, available: 3 })
        );
        assert_eq!(catalog.check_stock(101).await, Ok(10));

        catalog.reduce_stock_batch(&[(101, 2), (104, 3)]).await.unwrap();
        assert_eq!(catalog.check_stock(101).await, Ok(8));
        assert_eq!(catalog.check_stock(104).await, Ok(0));
    }

    #[tokio::test]
    async fn test_closed_catalog_reports_communication_error() {
        let (actor, inner) = ResourceActor::new(1, default_catalog());
        drop(actor);
        let catalog = CatalogClient::new(inner);

        assert!(matches!(
            catalog.get_product(101).await,
            Err(CatalogError::ActorCommunicationError(_))
        ));
    }
}
