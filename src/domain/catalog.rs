use serde::{Deserialize, Serialize};

/// Location of a hotspot, in percent of the page image (0-100 on each axis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Percentage from the left edge.
    pub x: f64,
    /// Percentage from the top edge.
    pub y: f64,
}

/// A clickable region on a catalog page that links to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub id: String,
    pub product_id: String,
    pub position: Position,
    /// Size of the hotspot in display pixels.
    pub size: u32,
}

impl Hotspot {
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        x: f64,
        y: f64,
        size: u32,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            position: Position { x, y },
            size,
        }
    }
}

/// One browsable page: a background image plus its hotspots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub id: String,
    pub image_url: String,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

impl CatalogPage {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            hotspots: Vec::new(),
        }
    }

    pub fn with_hotspot(mut self, hotspot: Hotspot) -> Self {
        self.hotspots.push(hotspot);
        self
    }

    pub fn hotspot(&self, hotspot_id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|hotspot| hotspot.id == hotspot_id)
    }
}
