//! Catalog items

use serde::{Deserialize, Serialize};

use super::{ClothingCategory, Size};

/// Clothing item offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub category: ClothingCategory,
    pub description: String,
    pub price: f64,
    pub sizes: Vec<Size>,
    pub colors: Vec<String>,
    pub mesh_url: String,
    pub texture_url: String,
    pub thumbnail_url: String,
    pub brand_name: String,
    pub affiliate_link: String,
}

impl ClothingItem {
    /// Lower-cased text searched by free-text queries: name, description, brand
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.brand_name).to_lowercase()
    }
}
