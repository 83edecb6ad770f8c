//! Sizing tables, in centimetres
//!
//! Each tier keeps its own ladder. Tiers that share cut points share the
//! `Cuts` constant so the bounds cannot drift apart.

use crate::ladder::{Cuts, Ladder};

/// Tops, bust reading
pub const TOPS_BUST: Ladder = Ladder::new(
    [82.0, 87.0, 93.0, 100.0, 107.0, 115.0],
    [0.80, 0.85, 0.90, 0.85, 0.80, 0.75, 0.70],
);

/// Tops, shoulder width reading (bust missing)
pub const TOPS_SHOULDER: Ladder = Ladder::new(
    [36.0, 38.0, 40.0, 42.0, 44.0, 46.0],
    [0.70, 0.75, 0.80, 0.75, 0.70, 0.65, 0.60],
);

/// Bottoms, mean of waist and hips
pub const BOTTOMS_WAIST_HIPS: Ladder = Ladder::new(
    [75.0, 82.0, 90.0, 98.0, 106.0, 116.0],
    [0.85, 0.90, 0.90, 0.85, 0.80, 0.75, 0.70],
);

/// Bottoms, waist only
pub const BOTTOMS_WAIST: Ladder = Ladder::new(
    [70.0, 76.0, 84.0, 92.0, 102.0, 112.0],
    [0.75, 0.80, 0.80, 0.75, 0.70, 0.65, 0.60],
);

/// Bottoms, hips only
pub const BOTTOMS_HIPS: Ladder = Ladder::new(
    [80.0, 88.0, 96.0, 104.0, 112.0, 120.0],
    [0.70, 0.75, 0.75, 0.70, 0.65, 0.60, 0.55],
);

/// Dress cut points, used by both averaged tiers
pub const DRESS_CUTS: Cuts = [76.0, 82.0, 90.0, 98.0, 106.0, 116.0];

/// Dresses, mean of bust, waist and hips
pub const DRESSES_BUST_WAIST_HIPS: Ladder =
    Ladder::new(DRESS_CUTS, [0.85, 0.90, 0.90, 0.85, 0.80, 0.75, 0.70]);

/// Dresses, mean of bust and waist (hips missing)
pub const DRESSES_BUST_WAIST: Ladder =
    Ladder::new(DRESS_CUTS, [0.75, 0.80, 0.80, 0.75, 0.70, 0.65, 0.60]);

/// Bonus when an inseam backs a waist+hips bottoms estimate
pub const INSEAM_BONUS: f64 = 0.05;

/// Ceiling for the inseam bonus
pub const INSEAM_BONUS_CAP: f64 = 0.95;

/// Confidence penalty when outerwear combines bust and shoulder estimates
pub const OUTERWEAR_COMBINED_PENALTY: f64 = 0.9;

/// Confidence penalty when outerwear escalates a single estimate
pub const OUTERWEAR_SINGLE_PENALTY: f64 = 0.8;
