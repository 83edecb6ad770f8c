//! Request-independent service logic behind the HTTP handlers

pub mod avatar_service;
pub mod size_service;

pub use avatar_service::{register_avatar, GeneratedMeasurements, GenerationResult};
pub use size_service::SizeService;
