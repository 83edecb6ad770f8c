//! Threshold ladders
//!
//! A ladder maps one scalar reading to a size and a confidence. It holds six
//! exclusive upper bounds for `XS` through `XXL`; anything at or above the last
//! bound is `XXXL`. A value equal to a bound therefore belongs to the next
//! size up. Rungs are scanned in order, so values below the first bound
//! (including negative ones) land on `XS`.

use vto_common::Size;

/// Exclusive upper bounds for `XS..=XXL`
pub type Cuts = [f64; 6];

/// Confidence for each size `XS..=XXXL`
pub type Confidences = [f64; 7];

/// Size estimate produced by a ladder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub size: Size,
    pub confidence: f64,
}

impl Estimate {
    pub const fn new(size: Size, confidence: f64) -> Self {
        Self { size, confidence }
    }
}

/// Ordered `(upper bound, size, confidence)` table for one measurement tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ladder {
    cuts: Cuts,
    confidences: Confidences,
}

impl Ladder {
    pub const fn new(cuts: Cuts, confidences: Confidences) -> Self {
        Self { cuts, confidences }
    }

    /// Look up the rung for a reading
    pub fn classify(&self, value: f64) -> Estimate {
        let rank = self
            .cuts
            .iter()
            .position(|&bound| value < bound)
            .unwrap_or(self.cuts.len());
        Estimate::new(Size::from_rank(rank), self.confidences[rank])
    }

    /// Rungs as `(exclusive upper bound, size, confidence)`; the last rung is unbounded
    pub fn rungs(&self) -> impl Iterator<Item = (Option<f64>, Size, f64)> + '_ {
        Size::ALL.into_iter().enumerate().map(move |(rank, size)| {
            (self.cuts.get(rank).copied(), size, self.confidences[rank])
        })
    }
}
