//! Values derived from the cart and the product catalog.
//!
//! Nothing here holds state of its own: every read recomputes from the
//! latest cart snapshot, which is linear in a list of a few dozen entries.

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::catalog_data::ProductCatalog;
use crate::domain::cart::{line_price, saturating_total};
use crate::domain::{CartItem, CartItemView, CartSnapshot, CartStats};

/// Item count and total price of `items`.
///
/// Entries whose product no longer resolves still count as items but add
/// nothing to the total.
pub fn cart_stats(items: &[CartItem], catalog: &ProductCatalog) -> CartStats {
    let item_count = items
        .iter()
        .fold(0i64, |total, item| total.saturating_add(item.quantity));
    let total_price = items
        .iter()
        .filter_map(|item| {
            catalog
                .get_product_by_id(&item.product_id)
                .map(|product| line_price(product.price, item.quantity))
        })
        .fold(Decimal::ZERO, saturating_total);

    CartStats {
        item_count,
        total_price,
    }
}

/// Each entry joined with its product, in cart order.
pub fn cart_item_views(items: &[CartItem], catalog: &ProductCatalog) -> Vec<CartItemView> {
    items
        .iter()
        .map(|item| CartItemView {
            item: item.clone(),
            product: catalog.get_product_by_id(&item.product_id).cloned(),
        })
        .collect()
}

/// A read-only view over the cart that recomputes on every read.
pub struct CartProjection<T> {
    cart: watch::Receiver<CartSnapshot>,
    catalog: Arc<ProductCatalog>,
    project: fn(&[CartItem], &ProductCatalog) -> T,
}

impl<T> CartProjection<T> {
    pub fn new(
        cart: watch::Receiver<CartSnapshot>,
        catalog: Arc<ProductCatalog>,
        project: fn(&[CartItem], &ProductCatalog) -> T,
    ) -> Self {
        Self {
            cart,
            catalog,
            project,
        }
    }

    /// Projection of the latest published cart.
    pub fn get(&self) -> T {
        let cart = self.cart.borrow().clone();
        (self.project)(&cart, &self.catalog)
    }

    /// Waits for the next cart change and returns the recomputed value.
    ///
    /// Returns `None` once the cart actor has stopped.
    pub async fn changed(&mut self) -> Option<T> {
        self.cart.changed().await.ok()?;
        let cart = self.cart.borrow_and_update().clone();
        Some((self.project)(&cart, &self.catalog))
    }
}
