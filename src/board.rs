//! Board texture analysis.
//!
//! A [`BoardTexture`] is a read-only snapshot of the suit and rank
//! structure of a public board. It is cheap to compute and never stored.

use crate::cards::card::{NUM_RANKS, NUM_SUITS};
use crate::cards::CardMask;
use serde::{Deserialize, Serialize};

/// Structural flags of a board.
///
/// An empty board reports every flag as false. For a non-empty board
/// `is_rainbow` and `is_monotone` follow their literal definitions, so a
/// single card is both; from two cards on they are mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTexture {
    /// Every card has a different suit.
    pub is_rainbow: bool,
    /// Exactly two suits are present.
    pub is_two_tone: bool,
    /// Every card shares one suit.
    pub is_monotone: bool,
    /// At least two cards share a rank.
    pub is_paired: bool,
    /// Three cards share a rank.
    pub is_trips: bool,
    /// Four cards share a rank.
    pub is_quads: bool,
    /// Trips plus another pair.
    pub is_full_house: bool,
    /// Three consecutive ranks (A-2-3 included).
    pub has_straight_draw: bool,
    /// Three or more cards of one suit.
    pub has_flush_draw: bool,
}

impl BoardTexture {
    /// Analyze a board of any size.
    pub fn analyze(board: CardMask) -> Self {
        let n = board.count();
        if n == 0 {
            return Self::default();
        }

        let mut suit_counts = [0usize; NUM_SUITS as usize];
        let mut rank_counts = [0usize; NUM_RANKS as usize];
        for card in board.iter() {
            suit_counts[card.suit() as usize] += 1;
            rank_counts[card.rank() as usize] += 1;
        }

        let suits_present = suit_counts.iter().filter(|&&c| c > 0).count();
        let max_suit = suit_counts.iter().copied().max().unwrap_or(0);

        let pairs = rank_counts.iter().filter(|&&c| c == 2).count();
        let trips = rank_counts.iter().filter(|&&c| c == 3).count();
        let quads = rank_counts.iter().filter(|&&c| c == 4).count();

        Self {
            is_rainbow: suits_present == n,
            is_two_tone: suits_present == 2,
            is_monotone: suits_present == 1,
            is_paired: rank_counts.iter().any(|&c| c >= 2),
            is_trips: trips > 0,
            is_quads: quads > 0,
            is_full_house: trips > 0 && (pairs > 0 || trips > 1),
            has_straight_draw: has_three_connected(board.rank_bits()),
            has_flush_draw: max_suit >= 3,
        }
    }
}

/// Three consecutive ranks, with the ace also playing low.
fn has_three_connected(rank_bits: u16) -> bool {
    // Ace at bit 0, deuce at bit 1, ..., ace again at bit 13
    let bits = ((rank_bits as u32) << 1) | ((rank_bits as u32 >> 12) & 1);
    (bits & (bits >> 1) & (bits >> 2)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(s: &str) -> BoardTexture {
        BoardTexture::analyze(CardMask::parse(s).unwrap())
    }

    #[test]
    fn test_monotone() {
        let t = texture("As Ks Qs");
        assert!(t.is_monotone);
        assert!(!t.is_rainbow);
        assert!(!t.is_two_tone);
        assert!(t.has_flush_draw);
    }

    #[test]
    fn test_rainbow() {
        let t = texture("As Kd Qc");
        assert!(t.is_rainbow);
        assert!(!t.is_monotone);
        assert!(!t.has_flush_draw);

        assert!(texture("As Kd Qc Jh").is_rainbow);
        // Five cards cannot all have distinct suits
        assert!(!texture("As Kd Qc Jh 2s").is_rainbow);
    }

    #[test]
    fn test_paired() {
        let t = texture("As Ad Ks");
        assert!(t.is_paired);
        assert!(!t.is_trips);
        assert!(t.is_two_tone);
        assert!(!texture("As Kd Qc").is_paired);
    }

    #[test]
    fn test_trips_quads_full_house() {
        let t = texture("7s 7d 7c");
        assert!(t.is_trips && t.is_paired && !t.is_full_house);

        let t = texture("7s 7d 7c 2h 2d");
        assert!(t.is_full_house);

        let t = texture("7s 7d 7c 7h");
        assert!(t.is_quads && !t.is_trips);
    }

    #[test]
    fn test_straight_draw() {
        assert!(texture("9s 8d 7c").has_straight_draw);
        assert!(texture("As 2d 3c").has_straight_draw);
        assert!(texture("Qs Kd Ac").has_straight_draw);
        assert!(!texture("As Kd 2c").has_straight_draw);
        assert!(!texture("9s 7d 5c").has_straight_draw);
    }

    #[test]
    fn test_small_boards() {
        assert_eq!(texture(""), BoardTexture::default());

        let t = texture("As");
        assert!(t.is_rainbow && t.is_monotone);

        let t = texture("As Kd");
        assert!(t.is_rainbow && !t.is_monotone);
    }
}
