//! # VTO Common Library
//!
//! Shared code for the virtual try-on workspace:
//! - Domain models (measurements, sizes, categories, avatars, catalog items)
//! - Error and result types
//! - Bootstrap configuration loading
//! - Timestamp helpers

pub mod config;
pub mod error;
pub mod models;
pub mod time;

pub use error::{Error, Result};
pub use models::{Avatar, ClothingCategory, ClothingItem, Measurements, Size, SizeRecommendation};
