//! Ace-to-five low evaluation with eight-or-better qualification.
//!
//! Straights and flushes do not count against a low, and only the five
//! lowest distinct ranks matter. A pool without five distinct ranks of
//! eight or lower has no qualifying low, which is a normal result rather
//! than an error.

use crate::cards::{Card, CardMask};
use crate::error::{PokerError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Highest ace-low rank allowed in a qualifying low.
pub const LOW_QUALIFIER: u8 = 8;

/// A qualifying low. Greater compares as better, so the wheel (5-4-3-2-A)
/// is the maximum.
///
/// Stores the five ace-low ranks (A=1 .. 8=8), highest first, packed into
/// 4-bit nibbles.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LowStrength(u32);

impl LowStrength {
    /// Build from five distinct ace-low ranks in descending order.
    fn from_descending(ranks: [u8; 5]) -> Self {
        let value = ranks
            .iter()
            .fold(0u32, |acc, &r| (acc << 4) | r as u32);
        Self(value)
    }

    /// Ace-low ranks (A=1 .. 8=8), highest first.
    pub fn ranks(&self) -> [u8; 5] {
        let mut out = [0u8; 5];
        for (i, r) in out.iter_mut().enumerate() {
            *r = ((self.0 >> (16 - i * 4)) & 0xF) as u8;
        }
        out
    }

    /// Raw packed value; smaller is a better low.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl PartialOrd for LowStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LowStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower packed value is the better low
        other.0.cmp(&self.0)
    }
}

impl fmt::Display for LowStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.ranks().iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            if *r == 1 {
                write!(f, "A")?;
            } else {
                write!(f, "{}", r)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for LowStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LowStrength({})", self)
    }
}

/// Outcome of a low evaluation.
///
/// Ordered so that any qualifying low beats `NoQualifyingLow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LowResult {
    /// No five distinct ranks of eight or lower.
    NoQualifyingLow,
    /// The best qualifying low.
    Qualified(LowStrength),
}

impl LowResult {
    /// Whether a low was made.
    pub fn is_qualified(&self) -> bool {
        matches!(self, LowResult::Qualified(_))
    }

    /// The low, if any.
    pub fn strength(&self) -> Option<LowStrength> {
        match self {
            LowResult::Qualified(s) => Some(*s),
            LowResult::NoQualifyingLow => None,
        }
    }
}

impl fmt::Display for LowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowResult::Qualified(s) => write!(f, "{}", s),
            LowResult::NoQualifyingLow => write!(f, "No Low"),
        }
    }
}

/// Ace-low rank of a card (A=1, 2=2 .. K=13).
#[inline]
fn ace_low_rank(card: Card) -> u8 {
    match card.rank() {
        12 => 1,
        r => r + 2,
    }
}

/// Best low from a set of cards of any size.
pub(crate) fn best_low(cards: impl IntoIterator<Item = Card>) -> LowResult {
    // Bit r set when ace-low rank r (1..=8) is present
    let mut present = 0u16;
    for card in cards {
        let r = ace_low_rank(card);
        if r <= LOW_QUALIFIER {
            present |= 1 << r;
        }
    }
    if present.count_ones() < 5 {
        return LowResult::NoQualifyingLow;
    }

    // Keep the five lowest ranks
    let mut lowest = [0u8; 5];
    let mut n = 0;
    for r in 1..=LOW_QUALIFIER {
        if present & (1 << r) != 0 {
            lowest[n] = r;
            n += 1;
            if n == 5 {
                break;
            }
        }
    }
    lowest.reverse();
    LowResult::Qualified(LowStrength::from_descending(lowest))
}

/// Evaluate the best eight-or-better low in a pool of 5 to 7 cards.
pub fn evaluate_low(mask: CardMask) -> Result<LowResult> {
    let n = mask.count();
    if !(5..=7).contains(&n) {
        return Err(PokerError::insufficient("5-7", n));
    }
    Ok(best_low(mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low(s: &str) -> LowResult {
        evaluate_low(CardMask::parse(s).unwrap()).unwrap()
    }

    #[test]
    fn test_wheel_is_best() {
        let wheel = low("As 2d 3h 4c 5s");
        assert_eq!(wheel.to_string(), "5-4-3-2-A");
        assert!(wheel > low("As 2d 3h 4c 6s"));
        assert!(wheel > low("8s 7d 6h 5c 4s"));
    }

    #[test]
    fn test_eight_high_qualifies() {
        let eight = low("8s 7d 6h 5c 4s");
        assert!(eight.is_qualified());
        assert_eq!(eight.strength().unwrap().ranks(), [8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_nine_does_not_qualify() {
        assert_eq!(low("9s 7d 6h 5c 4s"), LowResult::NoQualifyingLow);
    }

    #[test]
    fn test_pair_does_not_qualify() {
        assert_eq!(low("As Ad 2h 3c 4s"), LowResult::NoQualifyingLow);
    }

    #[test]
    fn test_straights_and_flushes_ignored() {
        // A spade wheel is still the best low
        assert_eq!(low("As 2s 3s 4s 5s"), low("Ah 2d 3c 4s 5h"));
    }

    #[test]
    fn test_seven_card_pool_uses_lowest_ranks() {
        let res = low("Ks 8d 2h 3c 7s 6d 4h");
        assert_eq!(res.to_string(), "7-6-4-3-2");

        // Pairs in the pool are skipped over
        let res = low("2s 2d 3h 3c 4s 5d 8h");
        assert_eq!(res.to_string(), "8-5-4-3-2");
    }

    #[test]
    fn test_no_low_ranks_below_any_low() {
        let worst_low = low("8s 7d 6h 5c 4s");
        assert!(worst_low > LowResult::NoQualifyingLow);
    }

    #[test]
    fn test_comparison_by_highest_card_first() {
        // 7-5-4-3-2 beats 7-6-3-2-A
        assert!(low("7s 5d 4h 3c 2s") > low("7s 6d 3h 2c As"));
        assert_eq!(low("7s 5d 4h 3c 2s"), low("7h 5c 4d 3s 2h"));
    }

    #[test]
    fn test_pool_size() {
        assert!(evaluate_low(CardMask::parse("As 2s 3s 4s").unwrap()).is_err());
    }
}
