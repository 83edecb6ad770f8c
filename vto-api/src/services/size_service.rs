//! Size recommendations for stored avatars
//!
//! Resolves an avatar to its measurement set and runs the recommender. The
//! two lookup failures (unknown avatar, avatar without measurements) are
//! reported separately so clients can tell "retry later" from "re-scan".

use tracing::{debug, info};
use vto_common::SizeRecommendation;

use crate::error::{ApiError, ApiResult};
use crate::store::AvatarStore;

/// Recommendation lookups against an avatar store
pub struct SizeService<'a> {
    avatars: &'a dyn AvatarStore,
}

impl<'a> SizeService<'a> {
    pub fn new(avatars: &'a dyn AvatarStore) -> Self {
        Self { avatars }
    }

    /// One recommendation per sized category, in response order
    pub fn recommendations(&self, avatar_id: &str) -> ApiResult<[SizeRecommendation; 4]> {
        let avatar = self
            .avatars
            .get(avatar_id)
            .ok_or_else(|| ApiError::NotFound(format!("Avatar not found: {}", avatar_id)))?;

        let measurements = avatar
            .measurements
            .ok_or_else(|| ApiError::NoMeasurements(avatar_id.to_string()))?;

        if measurements.is_empty() {
            debug!("Avatar {} has an empty measurement set, using default sizes", avatar_id);
        }

        let recommendations = vto_size::recommend(&measurements);
        info!(
            "Size recommendations for avatar {}: {}",
            avatar_id,
            recommendations
                .iter()
                .map(|r| format!("{}={}", r.category, r.recommended_size))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(recommendations)
    }
}
