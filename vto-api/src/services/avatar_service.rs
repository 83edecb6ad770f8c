//! Avatar registration
//!
//! The modelling service is called elsewhere; this module accepts its result
//! payload, converts the reported measurements and stores the avatar.

use serde::Deserialize;
use tracing::info;
use vto_common::{Avatar, Measurements};

use crate::error::{ApiError, ApiResult};
use crate::store::AvatarStore;

/// Result payload of the 3D modelling service
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResult {
    pub mesh_url: String,
    pub texture_url: String,
    #[serde(default)]
    pub measurements: Option<GeneratedMeasurements>,
}

/// Measurements as the modelling service reports them (snake_case, zero = not measured)
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GeneratedMeasurements {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub bust: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub inseam: Option<f64>,
    pub shoulder_width: Option<f64>,
}

impl From<GeneratedMeasurements> for Measurements {
    fn from(raw: GeneratedMeasurements) -> Self {
        let reported = |value: Option<f64>| value.filter(|v| *v != 0.0);
        Measurements {
            height: reported(raw.height),
            weight: reported(raw.weight),
            bust: reported(raw.bust),
            waist: reported(raw.waist),
            hips: reported(raw.hips),
            inseam: reported(raw.inseam),
            shoulder_width: reported(raw.shoulder_width),
        }
    }
}

/// Validate a generation result and store it as a new avatar
pub fn register_avatar(store: &dyn AvatarStore, result: GenerationResult) -> ApiResult<Avatar> {
    if result.mesh_url.trim().is_empty() {
        return Err(ApiError::BadRequest("mesh_url is required".to_string()));
    }
    if result.texture_url.trim().is_empty() {
        return Err(ApiError::BadRequest("texture_url is required".to_string()));
    }

    // An absent report is an empty set: the avatar still gets default sizes
    let measurements = result
        .measurements
        .map(Measurements::from)
        .unwrap_or_default();
    measurements.validate()?;

    let reported = measurements.fields().iter().filter(|(_, v)| v.is_some()).count();
    let avatar = Avatar::new(result.mesh_url, result.texture_url, Some(measurements));
    info!("Registered avatar {} ({} measurements)", avatar.id, reported);
    store.insert(avatar.clone());
    Ok(avatar)
}
