//! Clothing categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Catalog clothing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Footwear,
    Accessories,
    Hijabs,
    Scarves,
}

impl ClothingCategory {
    /// Every catalog category
    pub const ALL: [ClothingCategory; 8] = [
        ClothingCategory::Tops,
        ClothingCategory::Bottoms,
        ClothingCategory::Dresses,
        ClothingCategory::Outerwear,
        ClothingCategory::Footwear,
        ClothingCategory::Accessories,
        ClothingCategory::Hijabs,
        ClothingCategory::Scarves,
    ];

    /// Categories that receive a size recommendation, in response order
    pub const SIZED: [ClothingCategory; 4] = [
        ClothingCategory::Tops,
        ClothingCategory::Bottoms,
        ClothingCategory::Dresses,
        ClothingCategory::Outerwear,
    ];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingCategory::Tops => "tops",
            ClothingCategory::Bottoms => "bottoms",
            ClothingCategory::Dresses => "dresses",
            ClothingCategory::Outerwear => "outerwear",
            ClothingCategory::Footwear => "footwear",
            ClothingCategory::Accessories => "accessories",
            ClothingCategory::Hijabs => "hijabs",
            ClothingCategory::Scarves => "scarves",
        }
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothingCategory {
    type Err = Error;

    /// Category names are matched exactly, as clients send them
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClothingCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Invalid category: {}", s)))
    }
}
