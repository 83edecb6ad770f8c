//! Size recommender
//!
//! Maps a measurement set to one recommendation per sized category, in the
//! order tops, bottoms, dresses, outerwear. Every category walks a fixed list
//! of fallback tiers and settles on `M` at 0.6 when none of its readings are
//! available, so the result is always complete.
//!
//! A reading counts as provided when it is present, non-zero and not NaN.
//! Zero is how the modelling service reports "not measured". Negative values
//! are not rejected here; they fall to the lowest rung of whichever ladder
//! reads them.

use tracing::trace;
use vto_common::{ClothingCategory, Measurements, Size, SizeRecommendation};

use crate::ladder::Estimate;
use crate::tables::{
    BOTTOMS_HIPS, BOTTOMS_WAIST, BOTTOMS_WAIST_HIPS, DRESSES_BUST_WAIST, DRESSES_BUST_WAIST_HIPS,
    INSEAM_BONUS, INSEAM_BONUS_CAP, OUTERWEAR_COMBINED_PENALTY, OUTERWEAR_SINGLE_PENALTY,
    TOPS_BUST, TOPS_SHOULDER,
};

/// Fallback when a category has nothing to go on
pub const DEFAULT_ESTIMATE: Estimate = Estimate::new(Size::M, 0.6);

/// Recommend a size for every sized category
pub fn recommend(measurements: &Measurements) -> [SizeRecommendation; 4] {
    [
        recommend_tops(measurements),
        recommend_bottoms(measurements),
        recommend_dresses(measurements),
        recommend_outerwear(measurements),
    ]
}

/// Tops: bust, else shoulder width
///
/// Bust wins outright whenever it is provided; the two are never blended.
pub fn recommend_tops(measurements: &Measurements) -> SizeRecommendation {
    let (tier, estimate) = if let Some(bust) = provided(measurements.bust) {
        ("bust", TOPS_BUST.classify(bust))
    } else if let Some(shoulder_width) = provided(measurements.shoulder_width) {
        ("shoulder_width", TOPS_SHOULDER.classify(shoulder_width))
    } else {
        ("default", DEFAULT_ESTIMATE)
    };
    finish(ClothingCategory::Tops, tier, estimate)
}

/// Bottoms: mean of waist and hips, else waist, else hips
///
/// An inseam only raises the confidence of the waist+hips tier.
pub fn recommend_bottoms(measurements: &Measurements) -> SizeRecommendation {
    let waist = provided(measurements.waist);
    let hips = provided(measurements.hips);

    let (tier, estimate) = match (waist, hips) {
        (Some(waist), Some(hips)) => {
            let mut estimate = BOTTOMS_WAIST_HIPS.classify((waist + hips) / 2.0);
            if provided(measurements.inseam).is_some() {
                estimate.confidence = (estimate.confidence + INSEAM_BONUS).min(INSEAM_BONUS_CAP);
            }
            ("waist_hips", estimate)
        }
        (Some(waist), None) => ("waist", BOTTOMS_WAIST.classify(waist)),
        (None, Some(hips)) => ("hips", BOTTOMS_HIPS.classify(hips)),
        (None, None) => ("default", DEFAULT_ESTIMATE),
    };
    finish(ClothingCategory::Bottoms, tier, estimate)
}

/// Dresses: mean of bust, waist and hips, else mean of bust and waist, else bust as a top
pub fn recommend_dresses(measurements: &Measurements) -> SizeRecommendation {
    let bust = provided(measurements.bust);
    let waist = provided(measurements.waist);
    let hips = provided(measurements.hips);

    let (tier, estimate) = match (bust, waist, hips) {
        (Some(bust), Some(waist), Some(hips)) => (
            "bust_waist_hips",
            DRESSES_BUST_WAIST_HIPS.classify((bust + waist + hips) / 3.0),
        ),
        (Some(bust), Some(waist), None) => {
            ("bust_waist", DRESSES_BUST_WAIST.classify((bust + waist) / 2.0))
        }
        (Some(bust), None, _) => {
            let top = recommend_tops(&Measurements::bust_only(bust));
            ("bust_as_top", Estimate::new(top.recommended_size, top.confidence))
        }
        (None, _, _) => ("default", DEFAULT_ESTIMATE),
    };
    finish(ClothingCategory::Dresses, tier, estimate)
}

/// Outerwear: the tops size one step up, for layering room
///
/// With both bust and shoulder width the larger of the two tops sizes is
/// escalated and the mean confidence takes a 0.9 penalty. A single reading is
/// escalated with a 0.8 penalty. With neither the default applies unchanged.
pub fn recommend_outerwear(measurements: &Measurements) -> SizeRecommendation {
    let bust = provided(measurements.bust);
    let shoulder_width = provided(measurements.shoulder_width);

    let (tier, estimate) = match (bust, shoulder_width) {
        (Some(bust), Some(shoulder_width)) => {
            let by_bust = recommend_tops(&Measurements::bust_only(bust));
            let by_shoulder = recommend_tops(&Measurements::shoulder_width_only(shoulder_width));
            let base = by_bust.recommended_size.max(by_shoulder.recommended_size);
            let confidence =
                (by_bust.confidence + by_shoulder.confidence) / 2.0 * OUTERWEAR_COMBINED_PENALTY;
            ("bust_shoulder", Estimate::new(base.step_up(), confidence))
        }
        (Some(bust), None) => ("bust", escalate(recommend_tops(&Measurements::bust_only(bust)))),
        (None, Some(shoulder_width)) => (
            "shoulder_width",
            escalate(recommend_tops(&Measurements::shoulder_width_only(shoulder_width))),
        ),
        (None, None) => ("default", DEFAULT_ESTIMATE),
    };
    finish(ClothingCategory::Outerwear, tier, estimate)
}

fn escalate(top: SizeRecommendation) -> Estimate {
    Estimate::new(
        top.recommended_size.step_up(),
        top.confidence * OUTERWEAR_SINGLE_PENALTY,
    )
}

fn provided(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn finish(category: ClothingCategory, tier: &'static str, estimate: Estimate) -> SizeRecommendation {
    trace!(
        category = category.as_str(),
        tier,
        size = estimate.size.as_str(),
        confidence = estimate.confidence,
        "size estimated"
    );
    SizeRecommendation::new(category, estimate.size, estimate.confidence)
}
