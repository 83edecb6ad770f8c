//! HTTP API handlers for vto-api

pub mod avatar;
pub mod clothing;
pub mod health;
pub mod size;

pub use avatar::{create_avatar, get_avatar};
pub use clothing::{get_all_clothing, get_clothing_by_category, get_clothing_item, search_clothing};
pub use health::health_routes;
pub use size::get_size_recommendations;
