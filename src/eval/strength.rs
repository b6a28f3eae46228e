//! Comparable hand strength values.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// All categories, worst first.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// Get the category name. This is the only label projection.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }

    fn from_index(index: u32) -> Self {
        Self::ALL[(index as usize).min(8)]
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A high hand strength that can be compared.
/// Higher values are better hands.
/// Format: category (4 bits) | kicker1 (4 bits) | kicker2 (4 bits) | ...
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandStrength(u32);

impl HandStrength {
    /// Create a new hand strength from a category and up to five tiebreak ranks.
    pub(crate) fn new(category: HandCategory, kickers: &[u8]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, &k) in kickers.iter().take(5).enumerate() {
            value |= (k as u32) << (16 - i * 4);
        }
        Self(value)
    }

    /// Get the raw value for comparison.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Get the hand category.
    pub fn category(&self) -> HandCategory {
        HandCategory::from_index(self.0 >> 20)
    }

    /// Tiebreak ranks, most significant first (0-12: 2-A).
    pub fn kickers(&self) -> [u8; 5] {
        let mut out = [0u8; 5];
        for (i, k) in out.iter_mut().enumerate() {
            *k = ((self.0 >> (16 - i * 4)) & 0xF) as u8;
        }
        out
    }

    /// Label for display.
    pub fn label(&self) -> &'static str {
        self.category().name()
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Debug for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandStrength({}, {:?})", self.label(), self.kickers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        for pair in HandCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(HandCategory::Pair.name(), "Pair");
        assert_eq!(HandCategory::StraightFlush.to_string(), "Straight Flush");
        assert_eq!(HandCategory::ThreeOfAKind.name(), "Three of a Kind");
    }

    #[test]
    fn test_strength_packing() {
        let s = HandStrength::new(HandCategory::TwoPair, &[12, 11, 3]);
        assert_eq!(s.category(), HandCategory::TwoPair);
        assert_eq!(s.kickers(), [12, 11, 3, 0, 0]);
        assert_eq!(s.label(), "Two Pair");

        // Category dominates kickers
        let weak_flush = HandStrength::new(HandCategory::Flush, &[5, 4, 3, 2, 0]);
        let best_straight = HandStrength::new(HandCategory::Straight, &[12]);
        assert!(weak_flush > best_straight);

        // Kickers break ties inside a category
        let a = HandStrength::new(HandCategory::Pair, &[12, 10, 5, 2]);
        let b = HandStrength::new(HandCategory::Pair, &[12, 10, 5, 1]);
        assert!(a > b);
    }
}
