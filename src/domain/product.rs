use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a product that can be placed in the cart.
///
/// Products are loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    /// Free-form label -> text pairs shown on the product detail view.
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl Product {
    /// Creates a new Product with no details.
    ///
    /// # Arguments
    /// * `id` - Stable product identifier referenced by hotspots and cart entries
    /// * `name` - Display name
    /// * `price` - Unit price, never negative
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_detail(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.details.insert(label.into(), text.into());
        self
    }
}
