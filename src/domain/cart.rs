use std::collections::BTreeMap;
use super::ProductId;

/// Quantities reserved by one shopping session, keyed by product.
///
/// Entries always hold a positive quantity; setting zero removes the entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: BTreeMap<ProductId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reserved quantity for `id`, zero when absent.
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.entries.get(&id).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn set(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.entries.remove(&id);
        } else {
            self.entries.insert(id, quantity);
        }
    }

    pub fn remove(&mut self, id: ProductId) -> Option<u32> {
        self.entries.remove(&id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in product ID order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.entries.iter().map(|(&id, &qty)| (id, qty))
    }
}
