//! vto-api library - virtual try-on HTTP service
//!
//! Serves avatar registration, the clothing catalog and size
//! recommendations. Stores are injected through [`AppState`] so tests can run
//! the full router against fixtures.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub mod api;
pub mod error;
pub mod services;
pub mod store;

use store::{AvatarStore, Catalog, InMemoryAvatarStore};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Generated avatars
    pub avatars: Arc<dyn AvatarStore>,
    /// Read-only clothing catalog
    pub catalog: Arc<Catalog>,
    /// Browser origin allowed by CORS; `None` disables the CORS layer
    pub cors_origin: Option<String>,
}

impl AppState {
    /// Create new application state
    pub fn new(avatars: Arc<dyn AvatarStore>, catalog: Catalog) -> Self {
        Self {
            avatars,
            catalog: Arc::new(catalog),
            cors_origin: None,
        }
    }

    /// State with an empty in-memory avatar store
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(Arc::new(InMemoryAvatarStore::new()), catalog)
    }

    pub fn with_cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route("/api/avatar", post(api::create_avatar))
        .route("/api/avatar/:id", get(api::get_avatar))
        .route(
            "/api/size/recommendations/:avatar_id",
            get(api::get_size_recommendations),
        )
        .route("/api/clothing", get(api::get_all_clothing))
        .route("/api/clothing/search", get(api::search_clothing))
        .route(
            "/api/clothing/category/:category",
            get(api::get_clothing_by_category),
        )
        .route("/api/clothing/:id", get(api::get_clothing_item));

    let cors = state.cors_origin.as_deref().and_then(cors_layer);

    let router = Router::new()
        .merge(api)
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match HeaderValue::from_str(origin) {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        ),
        Err(e) => {
            warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
            None
        }
    }
}
