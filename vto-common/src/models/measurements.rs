//! Body measurement sets
//!
//! All lengths are centimetres, weight is kilograms. Every field is optional:
//! the modelling service reports whatever it could derive from the photo.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Sparse set of body measurements
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bust: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inseam: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder_width: Option<f64>,
}

impl Measurements {
    /// Measurement set holding only a bust reading
    pub fn bust_only(bust: f64) -> Self {
        Self {
            bust: Some(bust),
            ..Self::default()
        }
    }

    /// Measurement set holding only a shoulder width reading
    pub fn shoulder_width_only(shoulder_width: f64) -> Self {
        Self {
            shoulder_width: Some(shoulder_width),
            ..Self::default()
        }
    }

    /// Named view of every field, in declaration order
    pub fn fields(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("height", self.height),
            ("weight", self.weight),
            ("bust", self.bust),
            ("waist", self.waist),
            ("hips", self.hips),
            ("inseam", self.inseam),
            ("shoulderWidth", self.shoulder_width),
        ]
    }

    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    /// Reject negative or non-finite readings
    ///
    /// The recommender itself accepts any value; this check belongs to the
    /// boundaries that admit new measurement sets.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.fields() {
            let Some(value) = value else { continue };
            if !value.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
