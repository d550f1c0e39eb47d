use thiserror::Error;
use crate::catalog_actor::CatalogError;
use crate::domain::ProductId;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Product {0} is out of stock")]
    OutOfStock(ProductId),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Invalid state: product {product_id} has {available} in stock but {requested} were reserved")]
    InvalidState {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// True for internal failures, as opposed to input the user can correct.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            CartError::InvalidState { .. } | CartError::ActorCommunicationError(_)
        )
    }
}

impl From<CatalogError> for CartError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => CartError::NotFound(id),
            CatalogError::InvalidState { product_id, requested, available } => {
                CartError::InvalidState { product_id, requested, available }
            }
            CatalogError::ActorCommunicationError(msg) => CartError::ActorCommunicationError(msg),
        }
    }
}
