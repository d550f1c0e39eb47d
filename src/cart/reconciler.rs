use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use crate::clients::CatalogClient;
use crate::domain::{Cart, CartLine, CartView, PaymentMethod, ProductId, Receipt};
use super::error::CartError;
use super::outcome::{AddOutcome, CheckoutOutcome, RemoveOutcome};

/// Produces the identifier stamped on each receipt.
pub type OrderIdFn = Arc<dyn Fn() -> String + Send + Sync>;

/// `order_1`, `order_2`, ... shared by every session holding a clone.
pub fn sequential_order_ids() -> OrderIdFn {
    let counter = Arc::new(AtomicU64::new(1));
    Arc::new(move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("order_{}", id)
    })
}

/// One shopping session: the cart plus the catalog it reserves against.
///
/// Reservations live only in the cart. Catalog stock changes at checkout,
/// where all lines are reduced in a single atomic batch.
pub struct CartReconciler {
    cart: Cart,
    catalog: CatalogClient,
    next_order_id: OrderIdFn,
}

impl CartReconciler {
    pub fn new(catalog: CatalogClient, next_order_id: OrderIdFn) -> Self {
        Self {
            cart: Cart::new(),
            catalog,
            next_order_id,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Reserves up to `requested` units, clamped to the stock not yet held by this cart.
    #[instrument(skip(self))]
    pub async fn add_item(&mut self, product_id: ProductId, requested: u32) -> Result<AddOutcome, CartError> {
        let product = self.catalog.require_product(product_id).await?;

        if product.stock == 0 {
            debug!("Product has no stock");
            return Err(CartError::OutOfStock(product_id));
        }
        if requested == 0 {
            return Err(CartError::InvalidQuantity(requested));
        }

        let already = self.cart.quantity(product_id);
        let available = product.stock.saturating_sub(already);
        if available == 0 {
            debug!(already, "All stock already reserved by this cart");
            return Err(CartError::OutOfStock(product_id));
        }

        let added = requested.min(available);
        let in_cart = already + added;
        self.cart.set(product_id, in_cart);

        if added < requested {
            warn!(requested, added, "Requested quantity reduced to available stock");
        }
        info!(added, in_cart, "Item added to cart");

        Ok(AddOutcome {
            product_id,
            name: product.name,
            requested,
            added,
            in_cart,
        })
    }

    /// Removes `requested` units, or the whole entry when that covers everything held.
    #[instrument(skip(self))]
    pub async fn remove_item(&mut self, product_id: ProductId, requested: u32) -> Result<RemoveOutcome, CartError> {
        if self.cart.is_empty() {
            return Err(CartError::EmptyCart);
        }
        if !self.cart.contains(product_id) {
            return Err(CartError::NotFound(product_id));
        }
        if requested == 0 {
            return Err(CartError::InvalidQuantity(requested));
        }

        let name = self.catalog.get_product(product_id).await?.map(|p| p.name);
        let current = self.cart.quantity(product_id);

        let outcome = if requested >= current {
            self.cart.remove(product_id);
            RemoveOutcome { product_id, name, removed: current, remaining: 0 }
        } else {
            let remaining = current - requested;
            self.cart.set(product_id, remaining);
            RemoveOutcome { product_id, name, removed: requested, remaining }
        };

        info!(removed = outcome.removed, remaining = outcome.remaining, "Item removed from cart");
        Ok(outcome)
    }

    /// Prices every cart entry against the catalog. Does not mutate anything.
    #[instrument(skip(self), fields(entries = self.cart.len()))]
    pub async fn view_cart(&self) -> Result<CartView, CartError> {
        let entries: Vec<(ProductId, u32)> = self.cart.iter().collect();
        let mut lines = Vec::with_capacity(entries.len());

        for (product_id, quantity) in entries {
            match self.catalog.get_product(product_id).await? {
                Some(product) => lines.push(CartLine {
                    product_id,
                    subtotal: product.price * f64::from(quantity),
                    name: product.name,
                    unit_price: product.price,
                    quantity,
                }),
                None => warn!(product_id, "Skipping cart entry missing from catalog"),
            }
        }

        Ok(CartView::from_lines(lines))
    }

    /// Commits every reservation to catalog stock and clears the cart.
    ///
    /// # Errors
    /// `InvalidState` when some line exceeds current stock. Nothing is
    /// reduced in that case and the cart is left as it was.
    #[instrument(skip(self))]
    pub async fn checkout(&mut self, payment: PaymentMethod) -> Result<CheckoutOutcome, CartError> {
        let view = self.view_cart().await?;
        if view.is_empty() || view.total == 0.0 {
            info!("Nothing to check out");
            return Ok(CheckoutOutcome::NoOp);
        }

        let reductions: Vec<(ProductId, u32)> = view
            .lines
            .iter()
            .map(|line| (line.product_id, line.quantity))
            .collect();

        if let Err(e) = self.catalog.reduce_stock_batch(&reductions).await {
            let e = CartError::from(e);
            error!(error = %e, "Checkout aborted, no stock was changed");
            return Err(e);
        }

        self.cart.clear();
        let receipt = Receipt {
            order_id: (self.next_order_id)(),
            lines: view.lines,
            total: view.total,
            payment,
        };
        info!(order_id = %receipt.order_id, total = receipt.total, "Checkout complete");

        Ok(CheckoutOutcome::Completed(receipt))
    }
}
