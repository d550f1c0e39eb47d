use crate::domain::{ProductId, Receipt};

/// Result of a successful `add_item`.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub product_id: ProductId,
    pub name: String,
    pub requested: u32,
    pub added: u32,
    pub in_cart: u32,
}

impl AddOutcome {
    /// The request was clamped to what was still available.
    pub fn is_reduced(&self) -> bool {
        self.added < self.requested
    }
}

/// Result of a successful `remove_item`.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveOutcome {
    pub product_id: ProductId,
    /// `None` when the product no longer resolves in the catalog.
    pub name: Option<String>,
    pub removed: u32,
    pub remaining: u32,
}

impl RemoveOutcome {
    pub fn removed_entry(&self) -> bool {
        self.remaining == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Nothing to pay for; no state changed.
    NoOp,
    Completed(Receipt),
}
