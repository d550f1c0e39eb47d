/// Custom actions for Product entities.
///
/// Stock is the only mutable field of a product, so these are the only
/// operations the catalog store exposes beyond lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Decrements stock by the given quantity.
    ///
    /// # Errors
    /// Fails with `InvalidState` when the quantity exceeds current stock.
    ReduceStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    StockLevel(u32),
    Reduced { remaining: u32 },
}
