//! Cart store: add/remove/update/clear with session-storage persistence.

mod actions;
pub mod entity;
pub mod error;
pub mod persistence;

pub use actions::*;
pub use entity::CartStore;
pub use error::*;

use std::sync::Arc;

use crate::actor_framework::StoreActor;
use crate::catalog_data::ProductCatalog;
use crate::clients::CartClient;

/// Creates a new cart actor, restored from `persistence`, and its client.
pub fn new(
    buffer_size: usize,
    persistence: persistence::CartPersistence,
    catalog: Arc<ProductCatalog>,
) -> (StoreActor<CartStore>, CartClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size, CartStore::restore(persistence));
    let client = CartClient::new(generic_client, catalog);

    (actor, client)
}
