use std::sync::Arc;

use tracing::{error, info, instrument};

use super::config::AppConfig;
use super::error::AppError;
use crate::cart_actor::persistence::{CartPersistence, MemorySessionStorage, SessionStorage};
use crate::catalog_data::ProductCatalog;
use crate::clients::{AnalyticsClient, CartClient, CatalogClient};
use crate::{analytics_actor, cart_actor, catalog_actor};

/// The application system: owns every store actor and hands out their clients.
///
/// Must be created inside a tokio runtime.
pub struct CatalogSystem {
    pub cart_client: CartClient,
    pub catalog_client: CatalogClient,
    pub analytics_client: AnalyticsClient,
    catalog: Arc<ProductCatalog>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Start all actors.
    ///
    /// # Arguments
    /// * `config` - Storage gating and channel sizing
    /// * `catalog` - Read-only products and pages
    /// * `storage` - Session storage offered by the host; ignored unless
    ///   `config.storage.browser` is set
    #[instrument(name = "catalog_system", skip_all)]
    pub fn new(
        config: &AppConfig,
        catalog: Arc<ProductCatalog>,
        storage: Arc<dyn SessionStorage>,
    ) -> Self {
        info!(
            products = catalog.products().len(),
            pages = catalog.page_count(),
            browser = config.storage.browser,
            "Starting catalog system"
        );

        let buffer_size = config.actors.buffer_size;
        let persistence =
            CartPersistence::new(storage, config.storage.key.clone(), config.storage.browser);

        let (cart_service, cart_client) = cart_actor::new(buffer_size, persistence, catalog.clone());
        let cart_handle = tokio::spawn(cart_service.run());

        let (navigation_service, catalog_client) = catalog_actor::new(buffer_size, catalog.clone());
        let navigation_handle = tokio::spawn(navigation_service.run());

        let (analytics_service, analytics_client) = analytics_actor::new(buffer_size);
        let analytics_handle = tokio::spawn(analytics_service.run());

        info!("Catalog system started successfully");

        Self {
            cart_client,
            catalog_client,
            analytics_client,
            catalog,
            handles: vec![cart_handle, navigation_handle, analytics_handle],
        }
    }

    /// Loads the catalog named in `config` (or the sample catalog) and starts
    /// the system on a fresh in-memory session storage.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let catalog = match &config.catalog.data_path {
            Some(path) => ProductCatalog::load(path)?,
            None => ProductCatalog::sample(),
        };
        let storage = match config.storage.quota_bytes {
            Some(quota) => MemorySessionStorage::with_quota(quota),
            None => MemorySessionStorage::new(),
        };
        Ok(Self::new(config, Arc::new(catalog), Arc::new(storage)))
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Stop every actor and wait for them to finish.
    ///
    /// **Error Handling:** Log errors but continue shutdown to prevent hangs
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down catalog system");

        let _ = self.cart_client.shutdown().await;
        let _ = self.catalog_client.shutdown().await;
        let _ = self.analytics_client.shutdown().await;

        let mut failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor shutdown error");
                failure.get_or_insert_with(|| e.to_string());
            }
        }

        match failure {
            Some(reason) => Err(AppError::Shutdown(reason)),
            None => {
                info!("Catalog system shutdown complete");
                Ok(())
            }
        }
    }
}
