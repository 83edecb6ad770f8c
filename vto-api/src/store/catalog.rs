//! Clothing catalog
//!
//! Read-only item list, loaded once at startup and owned by the application
//! state. Queries are linear scans; the catalog is small.

use std::path::Path;

use tracing::{info, warn};
use vto_common::{ClothingCategory, ClothingItem, Result};

/// In-memory clothing catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ClothingItem>,
}

impl Catalog {
    pub fn new(items: Vec<ClothingItem>) -> Self {
        Self { items }
    }

    /// Load a JSON array of items
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let items: Vec<ClothingItem> = serde_json::from_str(&content)?;
        Ok(Self::new(items))
    }

    /// Load the configured catalog, serving an empty one when that fails
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            warn!("No catalog configured, serving an empty catalog");
            return Self::default();
        };

        match Self::load(path) {
            Ok(catalog) => {
                info!("Loaded {} catalog items from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                warn!("Failed to load catalog {}: {} (serving an empty catalog)", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn all(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn by_category(&self, category: ClothingCategory) -> Vec<&ClothingItem> {
        self.items.iter().filter(|item| item.category == category).collect()
    }

    pub fn get(&self, id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Filter by category and free text
    ///
    /// An absent or unknown category does not filter. Every whitespace
    /// separated term of `description` must occur, case-insensitively, in the
    /// item's name, description or brand.
    pub fn search(&self, category: Option<&str>, description: Option<&str>) -> Vec<&ClothingItem> {
        let category = category.and_then(|c| c.parse::<ClothingCategory>().ok());
        let terms: Vec<String> = description
            .map(|d| d.to_lowercase().split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        self.items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .filter(|item| {
                if terms.is_empty() {
                    return true;
                }
                let text = item.search_text();
                terms.iter().all(|term| text.contains(term.as_str()))
            })
            .collect()
    }
}
