//! Catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use vto_common::{ClothingCategory, ClothingItem};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Query parameters for catalog search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub category: Option<String>,
    pub description: Option<String>,
}

/// GET /api/clothing
pub async fn get_all_clothing(State(state): State<AppState>) -> Json<Vec<ClothingItem>> {
    Json(state.catalog.all().to_vec())
}

/// GET /api/clothing/category/:category
pub async fn get_clothing_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<ClothingItem>>> {
    let category: ClothingCategory = category.parse()?;
    Ok(Json(
        state.catalog.by_category(category).into_iter().cloned().collect(),
    ))
}

/// GET /api/clothing/search?category=..&description=..
pub async fn search_clothing(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<ClothingItem>> {
    let results = state
        .catalog
        .search(query.category.as_deref(), query.description.as_deref());
    Json(results.into_iter().cloned().collect())
}

/// GET /api/clothing/:id
pub async fn get_clothing_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ClothingItem>> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Clothing item not found: {}", id)))
}
