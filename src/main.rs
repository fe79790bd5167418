use std::time::Duration;

use tracing::{info, Instrument};

use catalog_cart::{setup_tracing, AppConfig, AppError, CatalogSystem, LoadOptions};

/// Walks the catalog, adds every linked product to the cart, and reports
/// the cart as the storefront would render it.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::load(LoadOptions::default())?;
    setup_tracing(&config.logging);

    info!("Starting catalog storefront");

    let system = CatalogSystem::from_config(&config)?;
    let mut stats = system.cart_client.watch_stats();

    let watcher = tokio::spawn(
        async move {
            while let Some(stats) = stats.changed().await {
                info!(items = stats.item_count, total = %stats.total_price, "Cart changed");
            }
        }
        .instrument(tracing::info_span!("cart_watcher")),
    );

    let span = tracing::info_span!("browsing");
    async {
        let catalog = &system.catalog_client;
        loop {
            let Some(page) = catalog.current_page() else {
                break;
            };
            info!(page = %page.id, "Viewing page");

            for (hotspot, product) in catalog.current_hotspots() {
                system
                    .analytics_client
                    .record_interaction(page.id.clone(), hotspot.id.clone())
                    .await?;
                system.cart_client.add_one(product.id.clone()).await?;
            }
            system
                .analytics_client
                .record_time_spent(page.id.clone(), Duration::from_secs(5))
                .await?;

            if catalog.current_position().is_last() {
                break;
            }
            catalog.next_page().await?;
        }
        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await?;

    system.cart_client.update_quantity("p1".to_string(), 3).await?;
    system.cart_client.remove_item("p6".to_string()).await?;

    for line in system.cart_client.items() {
        let name = line.product.as_ref().map(|product| product.name.as_str()).unwrap_or("unknown product");
        info!(product = name, quantity = line.item.quantity, line_total = %line.line_total(), "Cart line");
    }
    let totals = system.cart_client.stats();
    info!(items = totals.item_count, total = %totals.total_price, "Cart totals");

    system.shutdown().await?;
    let _ = watcher.await;

    info!("Storefront session completed");
    Ok(())
}
