//! Catalog navigation: a single bounded page index.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::{CatalogNavigation, CatalogPosition};
pub use error::*;

use std::sync::Arc;

use crate::actor_framework::StoreActor;
use crate::catalog_data::ProductCatalog;
use crate::clients::CatalogClient;

/// Creates a new navigation actor sized to `catalog` and its client.
pub fn new(
    buffer_size: usize,
    catalog: Arc<ProductCatalog>,
) -> (StoreActor<CatalogNavigation>, CatalogClient) {
    let navigation = CatalogNavigation::new(catalog.page_count());
    let (actor, generic_client) = StoreActor::new(buffer_size, navigation);
    let client = CatalogClient::new(generic_client, catalog);

    (actor, client)
}
