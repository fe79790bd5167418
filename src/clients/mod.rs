//! Typed client handles, one per store actor.

#[macro_use]
mod macros;

mod analytics_client;
mod cart_client;
mod catalog_client;

pub use analytics_client::AnalyticsClient;
pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
