//! # VTO Size Recommendation
//!
//! Pure size-recommendation engine. Given a sparse measurement set it returns
//! one recommendation each for tops, bottoms, dresses and outerwear. No I/O,
//! no shared state: resolving the measurement set is the caller's concern.
//!
//! ```
//! use vto_common::{Measurements, Size};
//!
//! let recs = vto_size::recommend(&Measurements::bust_only(85.0));
//! assert_eq!(recs[0].recommended_size, Size::S);
//! assert_eq!(recs[3].recommended_size, Size::M);
//! ```

pub mod confidence;
pub mod ladder;
pub mod recommender;
pub mod tables;

pub use confidence::ConfidenceLevel;
pub use ladder::{Estimate, Ladder};
pub use recommender::{
    recommend, recommend_bottoms, recommend_dresses, recommend_outerwear, recommend_tops,
    DEFAULT_ESTIMATE,
};
