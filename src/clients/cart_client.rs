use std::sync::Arc;

use tracing::{debug, instrument};

use crate::actor_framework::StoreClient;
use crate::cart_actor::{CartAction, CartError, CartStore, DEFAULT_ADD_QUANTITY};
use crate::catalog_data::ProductCatalog;
use crate::domain::{CartItemView, CartSnapshot, CartStats};
use crate::projections::{self, CartProjection};

/// Client for interacting with the cart actor.
///
/// Every mutation resolves once the new cart has been stored and published,
/// and yields that cart.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<CartStore>,
    catalog: Arc<ProductCatalog>,
}

impl_store_client!(CartClient, CartStore, CartError, cart);

impl CartClient {
    pub fn new(inner: StoreClient<CartStore>, catalog: Arc<ProductCatalog>) -> Self {
        Self { inner, catalog }
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, product_id: String, quantity: i64) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        Ok(self.inner.dispatch(CartAction::AddItem { product_id, quantity }).await?)
    }

    /// Adds a single unit of `product_id`.
    pub async fn add_one(&self, product_id: String) -> Result<CartSnapshot, CartError> {
        self.add_item(product_id, DEFAULT_ADD_QUANTITY).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, product_id: String) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        Ok(self.inner.dispatch(CartAction::RemoveItem { product_id }).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(&self, product_id: String, quantity: i64) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        Ok(self.inner.dispatch(CartAction::UpdateQuantity { product_id, quantity }).await?)
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        Ok(self.inner.dispatch(CartAction::Clear).await?)
    }

    /// Item count and total price of the last published cart.
    pub fn stats(&self) -> CartStats {
        projections::cart_stats(&self.inner.current(), &self.catalog)
    }

    /// Cart entries joined with their products, in cart order.
    pub fn items(&self) -> Vec<CartItemView> {
        projections::cart_item_views(&self.inner.current(), &self.catalog)
    }

    pub fn watch_stats(&self) -> CartProjection<CartStats> {
        CartProjection::new(self.inner.subscribe(), self.catalog.clone(), projections::cart_stats)
    }

    pub fn watch_items(&self) -> CartProjection<Vec<CartItemView>> {
        CartProjection::new(self.inner.subscribe(), self.catalog.clone(), projections::cart_item_views)
    }
}
