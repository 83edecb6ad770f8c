//! Generated avatars

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Measurements;
use crate::time;

/// 3D avatar produced from a user photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub id: String,
    pub mesh_url: String,
    pub texture_url: String,
    pub created_at: DateTime<Utc>,
    /// Absent when the modelling service returned no measurement data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
}

impl Avatar {
    /// Create an avatar with a fresh UUIDv4 id, stamped now
    pub fn new(
        mesh_url: impl Into<String>,
        texture_url: impl Into<String>,
        measurements: Option<Measurements>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            mesh_url: mesh_url.into(),
            texture_url: texture_url.into(),
            created_at: time::now(),
            measurements,
        }
    }
}
