use thiserror::Error;

use super::config::ConfigError;
use crate::cart_actor::CartError;
use crate::catalog_actor::NavigationError;
use crate::analytics_actor::AnalyticsError;
use crate::catalog_data::CatalogError;

/// Anything that can stop the application from starting or running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}
