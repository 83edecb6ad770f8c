//! Avatar endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use vto_common::Avatar;

use crate::error::{ApiError, ApiResult};
use crate::services::{register_avatar, GenerationResult};
use crate::AppState;

/// POST /api/avatar
///
/// Registers the result of an avatar generation run.
pub async fn create_avatar(
    State(state): State<AppState>,
    Json(result): Json<GenerationResult>,
) -> ApiResult<(StatusCode, Json<Avatar>)> {
    let avatar = register_avatar(state.avatars.as_ref(), result)?;
    Ok((StatusCode::CREATED, Json(avatar)))
}

/// GET /api/avatar/:id
pub async fn get_avatar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Avatar>> {
    state
        .avatars
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Avatar not found: {}", id)))
}
