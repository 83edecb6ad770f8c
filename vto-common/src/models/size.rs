//! Garment size labels
//!
//! Sizes form a total order `XS < S < M < L < XL < XXL < XXXL`. The derived
//! `Ord` follows declaration order, so variants must stay listed smallest first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Garment size label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Xxxl,
}

impl Size {
    /// Every size, smallest first
    pub const ALL: [Size; 7] = [
        Size::Xs,
        Size::S,
        Size::M,
        Size::L,
        Size::Xl,
        Size::Xxl,
        Size::Xxxl,
    ];

    /// Zero-based position in the size order
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Size at the given rank, clamped to the largest size
    pub fn from_rank(rank: usize) -> Size {
        Size::ALL[rank.min(Size::ALL.len() - 1)]
    }

    /// Next size up, staying at `XXXL` once reached
    pub fn step_up(self) -> Size {
        Size::from_rank(self.rank() + 1)
    }

    /// Wire label ("XS" ... "XXXL")
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
            Size::Xxxl => "XXXL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_declaration() {
        assert!(Size::Xs < Size::S);
        assert!(Size::Xxl < Size::Xxxl);
        let mut sorted = Size::ALL;
        sorted.sort();
        assert_eq!(sorted, Size::ALL);
    }

    #[test]
    fn test_rank_round_trips_through_all() {
        for (index, size) in Size::ALL.iter().enumerate() {
            assert_eq!(size.rank(), index);
            assert_eq!(Size::from_rank(index), *size);
        }
    }

    #[test]
    fn test_step_up_clamps_at_largest() {
        assert_eq!(Size::M.step_up(), Size::L);
        assert_eq!(Size::Xxl.step_up(), Size::Xxxl);
        assert_eq!(Size::Xxxl.step_up(), Size::Xxxl);
        assert_eq!(Size::from_rank(42), Size::Xxxl);
    }

    #[test]
    fn test_serde_uses_uppercase_labels() {
        assert_eq!(serde_json::to_string(&Size::Xxl).unwrap(), "\"XXL\"");
        let parsed: Size = serde_json::from_str("\"XS\"").unwrap();
        assert_eq!(parsed, Size::Xs);
    }
}
