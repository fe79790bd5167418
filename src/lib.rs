//! # Catalog Cart
//!
//! State stores behind an interactive product catalog: browsable pages with
//! product hotspots, a session-persisted shopping cart, and page analytics.
//!
//! ## Ingredients
//!
//! - **Foundation**
//!     - **Domain types** - Plain data for products, pages and cart entries → [`domain`]
//!     - **Catalog data** - Read-only products and pages with id lookup → [`ProductCatalog`]
//! - **Core Patterns**
//!     - **Store actor** - One task owns a store, applies actions in order and
//!       publishes every new state on a watch channel before answering → [`StoreActor`]
//!     - **Generated clients** - Thin typed handles over the generic store client → [`CartClient`]
//! - **Stores**
//!     - **Cart** - add/remove/update/clear with best-effort session storage → [`cart_actor`]
//!     - **Navigation** - a bounded page index → [`catalog_actor`]
//!     - **Analytics** - time spent and hotspot clicks per page → [`analytics_actor`]
//!     - **Projections** - item count, total price and joined cart lines → [`projections`]
//! - **System Concerns**
//!     - **System coordinator** - startup and graceful shutdown → [`CatalogSystem`]
//!     - **Configuration and tracing** → [`AppConfig`], [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # use catalog_cart::{AppConfig, CatalogSystem};
//! # async fn demo() -> Result<(), catalog_cart::AppError> {
//! let system = CatalogSystem::from_config(&AppConfig::default())?;
//!
//! system.cart_client.add_item("p1".to_string(), 2).await?;
//! let stats = system.cart_client.stats();
//! println!("{} items, {} total", stats.item_count, stats.total_price);
//!
//! system.catalog_client.next_page().await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod analytics_actor;
pub mod app_system;
pub mod cart_actor;
pub mod catalog_actor;
pub mod catalog_data;
pub mod clients;
pub mod domain;
pub mod projections;

#[cfg(test)]
mod mock_framework;

pub use actor_framework::{Store, StoreActor, StoreClient, Transition};
pub use app_system::{setup_tracing, AppConfig, AppError, CatalogSystem, LoadOptions};
pub use catalog_data::ProductCatalog;
pub use clients::{AnalyticsClient, CartClient, CatalogClient};
