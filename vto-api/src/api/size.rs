//! Size recommendation endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use vto_common::SizeRecommendation;

use crate::error::ApiResult;
use crate::services::SizeService;
use crate::AppState;

/// GET /api/size/recommendations/:avatar_id
///
/// Returns `[{category, recommendedSize, confidence}]` for tops, bottoms,
/// dresses and outerwear.
pub async fn get_size_recommendations(
    State(state): State<AppState>,
    Path(avatar_id): Path<String>,
) -> ApiResult<Json<Vec<SizeRecommendation>>> {
    let recommendations = SizeService::new(state.avatars.as_ref()).recommendations(&avatar_id)?;
    Ok(Json(recommendations.to_vec()))
}
