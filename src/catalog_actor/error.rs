use thiserror::Error;
use crate::actor_framework::ResourceError;
use crate::domain::ProductId;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Invalid state: cannot reduce stock of product {product_id} by {requested}, only {available} left")]
    InvalidState {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<ResourceError<ProductId, CatalogError>> for CatalogError {
    fn from(err: ResourceError<ProductId, CatalogError>) -> Self {
        match err {
            ResourceError::NotFound(id) => CatalogError::NotFound(id),
            ResourceError::Entity(e) => e,
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
