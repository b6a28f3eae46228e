//! High hand evaluation.
//!
//! A pool of 5 to 7 cards is scored by exhaustive search over every
//! 5-card subset (at most 21). Each 5-card hand is ranked directly from
//! rank and suit counts.

use super::combos::Combinations;
use super::strength::{HandCategory, HandStrength};
use crate::cards::{Card, CardMask};
use crate::error::{PokerError, Result};
use rayon::prelude::*;

/// Evaluate exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    // Build rank counts and suit counts
    let mut rank_counts = [0u8; 13];
    let mut rank_bits = 0u16; // Bitmask of ranks present
    let first_suit = cards[0].suit();
    let mut is_flush = true;

    for card in cards {
        rank_counts[card.rank() as usize] += 1;
        rank_bits |= 1 << card.rank();
        is_flush &= card.suit() == first_suit;
    }

    let straight_high = find_straight(rank_bits);

    if let Some(high) = straight_high {
        if is_flush {
            return HandStrength::new(HandCategory::StraightFlush, &[high]);
        }
    }

    // Group ranks by multiplicity, highest rank first
    let mut quads = RankList::default();
    let mut trips = RankList::default();
    let mut pairs = RankList::default();
    let mut singles = RankList::default();

    for rank in (0..13u8).rev() {
        match rank_counts[rank as usize] {
            4 => quads.push(rank),
            3 => trips.push(rank),
            2 => pairs.push(rank),
            1 => singles.push(rank),
            _ => {}
        }
    }

    if let Some(q) = quads.first() {
        return HandStrength::new(HandCategory::FourOfAKind, &[q, singles.get(0)]);
    }

    if let (Some(t), Some(p)) = (trips.first(), pairs.first()) {
        return HandStrength::new(HandCategory::FullHouse, &[t, p]);
    }

    if is_flush {
        return HandStrength::new(HandCategory::Flush, singles.as_slice());
    }

    if let Some(high) = straight_high {
        return HandStrength::new(HandCategory::Straight, &[high]);
    }

    if let Some(t) = trips.first() {
        return HandStrength::new(HandCategory::ThreeOfAKind, &[t, singles.get(0), singles.get(1)]);
    }

    if pairs.len() == 2 {
        return HandStrength::new(HandCategory::TwoPair, &[pairs.get(0), pairs.get(1), singles.get(0)]);
    }

    if let Some(p) = pairs.first() {
        return HandStrength::new(
            HandCategory::Pair,
            &[p, singles.get(0), singles.get(1), singles.get(2)],
        );
    }

    HandStrength::new(HandCategory::HighCard, singles.as_slice())
}

/// Evaluate the best five-card hand in a pool of 5 to 7 cards.
///
/// Fails with `InsufficientCards` for any other pool size.
pub fn evaluate_high(mask: CardMask) -> Result<HandStrength> {
    let n = mask.count();
    if !(5..=7).contains(&n) {
        return Err(PokerError::insufficient("5-7", n));
    }

    let mut pool = [Card::from_id_unchecked(0); 7];
    for (slot, card) in pool.iter_mut().zip(mask.iter()) {
        *slot = card;
    }
    Ok(best_of(&pool[..n]))
}

/// Best five-card hand among `cards` (length 5 to 7, caller checked).
pub(crate) fn best_of(cards: &[Card]) -> HandStrength {
    debug_assert!((5..=7).contains(&cards.len()));
    Combinations::new(cards.len(), 5)
        .map(|combo| {
            let idx = combo.as_slice();
            evaluate_five(&[
                cards[idx[0] as usize],
                cards[idx[1] as usize],
                cards[idx[2] as usize],
                cards[idx[3] as usize],
                cards[idx[4] as usize],
            ])
        })
        .max()
        .unwrap_or(HandStrength::new(HandCategory::HighCard, &[]))
}

/// Evaluate many pools in parallel.
///
/// The whole batch fails on the first invalid pool in input order; no
/// partial result is returned.
pub fn evaluate_many(masks: &[CardMask]) -> Result<Vec<HandStrength>> {
    if let Some(bad) = masks.iter().find(|m| !(5..=7).contains(&m.count())) {
        return Err(PokerError::insufficient("5-7", bad.count()));
    }
    masks.par_iter().map(|&m| evaluate_high(m)).collect()
}

/// Find the highest straight from a rank bitmask.
/// Returns the high card of the straight, or None if no straight.
pub(crate) fn find_straight(rank_bits: u16) -> Option<u8> {
    // Check from ace-high down
    for high in (4..=12u8).rev() {
        let mask = 0b11111u16 << (high - 4);
        if rank_bits & mask == mask {
            return Some(high);
        }
    }

    // Wheel: A-2-3-4-5 = bits 12,0,1,2,3, high card is the 5
    const WHEEL: u16 = 0b1_0000_0000_1111;
    if rank_bits & WHEEL == WHEEL {
        return Some(3);
    }

    None
}

/// Up to five ranks on the stack.
#[derive(Default)]
struct RankList {
    ranks: [u8; 5],
    len: usize,
}

impl RankList {
    fn push(&mut self, rank: u8) {
        if self.len < 5 {
            self.ranks[self.len] = rank;
            self.len += 1;
        }
    }

    fn first(&self) -> Option<u8> {
        (self.len > 0).then(|| self.ranks[0])
    }

    fn get(&self, i: usize) -> u8 {
        if i < self.len {
            self.ranks[i]
        } else {
            0
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn as_slice(&self) -> &[u8] {
        &self.ranks[..self.len]
    }
}
