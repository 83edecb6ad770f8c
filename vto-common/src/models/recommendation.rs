//! Size recommendation records

use serde::{Deserialize, Serialize};

use super::{ClothingCategory, Size};

/// Recommended size for one clothing category
///
/// Serialized as `{category, recommendedSize, confidence}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRecommendation {
    pub category: ClothingCategory,
    pub recommended_size: Size,
    /// Evidence strength in `[0, 1]`
    pub confidence: f64,
}

impl SizeRecommendation {
    pub fn new(category: ClothingCategory, recommended_size: Size, confidence: f64) -> Self {
        Self {
            category,
            recommended_size,
            confidence,
        }
    }
}
