use std::sync::Arc;

use tracing::{debug, instrument};

use crate::actor_framework::StoreClient;
use crate::catalog_actor::{CatalogNavigation, CatalogPosition, NavigationAction, NavigationError};
use crate::catalog_data::ProductCatalog;
use crate::domain::{CatalogPage, Hotspot, Product};

/// Client for the catalog navigation actor, with read access to the catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StoreClient<CatalogNavigation>,
    catalog: Arc<ProductCatalog>,
}

impl_store_client!(CatalogClient, CatalogNavigation, NavigationError, position);

impl CatalogClient {
    pub fn new(inner: StoreClient<CatalogNavigation>, catalog: Arc<ProductCatalog>) -> Self {
        Self { inner, catalog }
    }

    #[instrument(skip(self))]
    pub async fn go_to_page(&self, index: usize) -> Result<CatalogPosition, NavigationError> {
        debug!("Sending request");
        Ok(self.inner.dispatch(NavigationAction::GoToPage(index)).await?)
    }

    #[instrument(skip(self))]
    pub async fn next_page(&self) -> Result<CatalogPosition, NavigationError> {
        debug!("Sending request");
        Ok(self.inner.dispatch(NavigationAction::NextPage).await?)
    }

    #[instrument(skip(self))]
    pub async fn previous_page(&self) -> Result<CatalogPosition, NavigationError> {
        debug!("Sending request");
        Ok(self.inner.dispatch(NavigationAction::PreviousPage).await?)
    }

    pub fn total_pages(&self) -> usize {
        self.catalog.page_count()
    }

    /// The page at the last published position, if the catalog has any pages.
    pub fn current_page(&self) -> Option<&CatalogPage> {
        self.catalog.page(self.inner.current().index)
    }

    /// Hotspots on the current page that link to a known product.
    pub fn current_hotspots(&self) -> Vec<(Hotspot, Product)> {
        self.current_page()
            .map(|page| {
                self.catalog
                    .resolve_hotspots(page)
                    .map(|(hotspot, product)| (hotspot.clone(), product.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.catalog.get_product_by_id(product_id)
    }
}
