use crate::actor_framework::Entity;
use crate::domain::{Product, ProductId};
use super::actions::{ProductAction, ProductActionResult};
use super::error::CatalogError;

impl Entity for Product {
    type Id = ProductId;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = CatalogError;

    fn id(&self) -> &ProductId { &self.id }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `ReduceStock(amount)`: Decrements stock by the specified amount
    ///
    /// # Errors
    /// Returns `InvalidState` if asked to remove more stock than is left.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, CatalogError> {
        match action {
            ProductAction::CheckStock => {
                Ok(ProductActionResult::StockLevel(self.stock))
            }
            ProductAction::ReduceStock(amount) => {
                if self.stock >= amount {
                    self.stock -= amount;
                    Ok(ProductActionResult::Reduced { remaining: self.stock })
                } else {
                    Err(CatalogError::InvalidState {
                        product_id: self.id,
                        requested: amount,
                        available: self.stock,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_stock_within_bounds() {
        let mut product = Product::new(103, "Mechanical Keyboard", 75.0, 5);

        assert_eq!(
            product.handle_action(ProductAction::ReduceStock(5)),
            Ok(ProductActionResult::Reduced { remaining: 0 })
        );
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_reduce_stock_beyond_bounds_is_rejected() {
        let mut product = Product::new(104, "4K Monitor (27 inch)", 299.99, 3);

        assert_eq!(
            product.handle_action(ProductAction::ReduceStock(4)),
            Err(CatalogError::InvalidState { product_id: 104, requested: 4, available: 3 })
        );
        assert_eq!(product.stock, 3);
    }
}
