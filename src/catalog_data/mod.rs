//! Read-only product and page data the stores are built on.

mod sample;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::domain::{CatalogPage, Hotspot, Product};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProduct(String),
}

/// Static products and catalog pages, fixed for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
    pages: Vec<CatalogPage>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>, pages: Vec<CatalogPage>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self { products, pages })
    }

    /// The built-in office furniture catalog.
    pub fn sample() -> Self {
        Self {
            products: sample::products(),
            pages: sample::pages(),
        }
    }

    /// Parses a `{ "products": [...], "pages": [...] }` document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let parsed: ProductCatalog = serde_json::from_str(raw)?;
        Self::new(parsed.products, parsed.pages)
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(
            products = catalog.products.len(),
            pages = catalog.pages.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn pages(&self) -> &[CatalogPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&CatalogPage> {
        self.pages.get(index)
    }

    /// Linear lookup; `None` for unknown ids, never an error.
    pub fn get_product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Hotspots on `page` paired with their product. Hotspots whose product
    /// does not resolve are skipped.
    pub fn resolve_hotspots<'a>(
        &'a self,
        page: &'a CatalogPage,
    ) -> impl Iterator<Item = (&'a Hotspot, &'a Product)> + 'a {
        page.hotspots.iter().filter_map(move |hotspot| {
            let product = self.get_product_by_id(&hotspot.product_id);
            if product.is_none() {
                debug!(hotspot_id = %hotspot.id, product_id = %hotspot.product_id, "Hotspot references unknown product");
            }
            product.map(|product| (hotspot, product))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn sample_catalog_has_three_pages_of_two_hotspots() {
        let catalog = ProductCatalog::sample();
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.page_count(), 3);
        assert!(catalog.pages().iter().all(|page| page.hotspots.len() == 2));
    }

    #[test]
    fn get_product_by_id_returns_none_for_unknown_ids() {
        let catalog = ProductCatalog::sample();
        let chair = catalog.get_product_by_id("p1").expect("p1 exists");
        assert_eq!(chair.name, "Premium Office Chair");
        assert_eq!(chair.price, Decimal::new(24999, 2));
        assert!(catalog.get_product_by_id("missing").is_none());
    }

    #[test]
    fn hotspots_are_found_by_id_within_their_page() {
        let catalog = ProductCatalog::sample();
        let page = catalog.page(0).unwrap();
        assert_eq!(page.hotspot("hs2").map(|hotspot| hotspot.product_id.as_str()), Some("p2"));
        assert!(page.hotspot("hs3").is_none());
    }

    #[test]
    fn unresolved_hotspots_are_skipped() {
        let page = CatalogPage::new("page1", "/page1.jpg")
            .with_hotspot(Hotspot::new("hs1", "p1", 30.0, 40.0, 40))
            .with_hotspot(Hotspot::new("hs2", "ghost", 70.0, 60.0, 40));
        let catalog = ProductCatalog::new(
            vec![Product::new("p1", "Chair", Decimal::new(10, 0))],
            vec![page.clone()],
        )
        .unwrap();

        let resolved: Vec<_> = catalog
            .resolve_hotspots(&page)
            .map(|(hotspot, product)| (hotspot.id.as_str(), product.id.as_str()))
            .collect();
        assert_eq!(resolved, vec![("hs1", "p1")]);
    }

    #[test]
    fn from_json_reads_camel_case_feed() {
        let raw = r#"{
            "products": [
                { "id": "p1", "name": "Chair", "description": "Comfy", "price": "249.99",
                  "imageUrl": "/chair.jpg", "details": { "color": "Black" } }
            ],
            "pages": [
                { "id": "page1", "imageUrl": "/page1.jpg",
                  "hotspots": [ { "id": "hs1", "productId": "p1", "position": { "x": 30, "y": 40 }, "size": 40 } ] }
            ]
        }"#;

        let catalog = ProductCatalog::from_json(raw).unwrap();
        let product = catalog.get_product_by_id("p1").unwrap();
        assert_eq!(product.image_url, "/chair.jpg");
        assert_eq!(product.details.get("color").map(String::as_str), Some("Black"));
        let hotspot = &catalog.page(0).unwrap().hotspots[0];
        assert_eq!(hotspot.product_id, "p1");
        assert_eq!(hotspot.position.x, 30.0);
    }

    #[test]
    fn from_json_rejects_duplicate_products() {
        let raw = r#"{
            "products": [
                { "id": "p1", "name": "A", "description": "", "price": "1", "imageUrl": "" },
                { "id": "p1", "name": "B", "description": "", "price": "2", "imageUrl": "" }
            ],
            "pages": []
        }"#;

        match ProductCatalog::from_json(raw) {
            Err(CatalogError::DuplicateProduct(id)) => assert_eq!(id, "p1"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ProductCatalog::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
