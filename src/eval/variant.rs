//! Variant-aware evaluation.
//!
//! Hold'em style games play the best five of all hole and board cards.
//! Omaha style games must use exactly two hole cards and three board
//! cards, so the search runs over every `C(hole, 2) x C(board, 3)` split.

use super::combos::Combinations;
use super::high::{evaluate_five, evaluate_high};
use super::low::{best_low, evaluate_low, LowResult};
use super::strength::{HandCategory, HandStrength};
use crate::cards::{Card, CardMask};
use crate::error::{PokerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported game variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVariant {
    /// Texas hold'em, high only.
    Holdem,
    /// Hold'em hi-lo, eight or better.
    Holdem8,
    /// Four card Omaha, high only.
    Omaha,
    /// Five card Omaha, high only.
    Omaha5,
    /// Six card Omaha, high only.
    Omaha6,
    /// Four card Omaha hi-lo, eight or better.
    Omaha8,
    /// Five card Omaha hi-lo, eight or better.
    Omaha85,
}

impl GameVariant {
    /// All variants.
    pub const ALL: [GameVariant; 7] = [
        GameVariant::Holdem,
        GameVariant::Holdem8,
        GameVariant::Omaha,
        GameVariant::Omaha5,
        GameVariant::Omaha6,
        GameVariant::Omaha8,
        GameVariant::Omaha85,
    ];

    /// Short name used for parsing and display.
    pub fn name(&self) -> &'static str {
        match self {
            GameVariant::Holdem => "holdem",
            GameVariant::Holdem8 => "holdem8",
            GameVariant::Omaha => "omaha",
            GameVariant::Omaha5 => "omaha5",
            GameVariant::Omaha6 => "omaha6",
            GameVariant::Omaha8 => "omaha8",
            GameVariant::Omaha85 => "omaha85",
        }
    }

    /// Number of hole cards dealt to each player.
    pub fn hole_cards(&self) -> usize {
        match self {
            GameVariant::Holdem | GameVariant::Holdem8 => 2,
            GameVariant::Omaha | GameVariant::Omaha8 => 4,
            GameVariant::Omaha5 | GameVariant::Omaha85 => 5,
            GameVariant::Omaha6 => 6,
        }
    }

    /// Whether the pot is split between high and an eight-or-better low.
    pub fn is_hi_lo(&self) -> bool {
        matches!(
            self,
            GameVariant::Holdem8 | GameVariant::Omaha8 | GameVariant::Omaha85
        )
    }

    /// Whether exactly two hole and three board cards must be used.
    pub fn uses_exact_split(&self) -> bool {
        !matches!(self, GameVariant::Holdem | GameVariant::Holdem8)
    }

    fn check_hole(&self, hole: CardMask) -> Result<()> {
        if hole.count() != self.hole_cards() {
            return Err(PokerError::insufficient(
                format!("{} hole", self.hole_cards()),
                hole.count(),
            ));
        }
        Ok(())
    }

    /// Best high hand for a player's hole cards on a board of 3 to 5 cards.
    pub fn evaluate_high(&self, hole: CardMask, board: CardMask) -> Result<HandStrength> {
        self.check_hole(hole)?;
        if self.uses_exact_split() {
            evaluate_variant_high(hole, board, 2, 3)
        } else {
            check_disjoint(hole, board)?;
            evaluate_high(hole | board)
        }
    }

    /// Best eight-or-better low for a player's hole cards on a board of 3 to 5 cards.
    pub fn evaluate_low(&self, hole: CardMask, board: CardMask) -> Result<LowResult> {
        self.check_hole(hole)?;
        if self.uses_exact_split() {
            evaluate_variant_low(hole, board, 2, 3)
        } else {
            check_disjoint(hole, board)?;
            evaluate_low(hole | board)
        }
    }
}

impl FromStr for GameVariant {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        GameVariant::ALL
            .iter()
            .copied()
            .find(|v| v.name() == lower)
            .ok_or_else(|| PokerError::UnsupportedVariant(s.to_string()))
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_disjoint(hole: CardMask, board: CardMask) -> Result<()> {
    match hole.intersect(board).iter().next() {
        Some(card) => Err(PokerError::DuplicateCard(card)),
        None => Ok(()),
    }
}

/// Validated cards for a split search.
struct Split {
    hole: [Card; 6],
    n_hole: usize,
    board: [Card; 5],
    n_board: usize,
}

fn split(
    hole: CardMask,
    board: CardMask,
    choose_from_hole: usize,
    choose_from_board: usize,
) -> Result<Split> {
    if choose_from_hole + choose_from_board != 5 {
        return Err(PokerError::insufficient(
            "5 chosen",
            choose_from_hole + choose_from_board,
        ));
    }
    let n_hole = hole.count();
    if n_hole < choose_from_hole || n_hole > 6 {
        return Err(PokerError::insufficient(
            format!("{}-6 hole", choose_from_hole),
            n_hole,
        ));
    }
    let n_board = board.count();
    if n_board < choose_from_board.max(3) || n_board > 5 {
        return Err(PokerError::insufficient(
            format!("{}-5 board", choose_from_board.max(3)),
            n_board,
        ));
    }
    check_disjoint(hole, board)?;

    let mut out = Split {
        hole: [Card::from_id_unchecked(0); 6],
        n_hole,
        board: [Card::from_id_unchecked(0); 5],
        n_board,
    };
    for (slot, card) in out.hole.iter_mut().zip(hole.iter()) {
        *slot = card;
    }
    for (slot, card) in out.board.iter_mut().zip(board.iter()) {
        *slot = card;
    }
    Ok(out)
}

/// Visit every five-card hand made of `choose_from_hole` hole cards and
/// `choose_from_board` board cards.
fn for_each_split<F: FnMut([Card; 5])>(s: &Split, choose_from_hole: usize, mut visit: F) {
    let choose_from_board = 5 - choose_from_hole;
    for h in Combinations::new(s.n_hole, choose_from_hole) {
        for b in Combinations::new(s.n_board, choose_from_board) {
            let mut five = [Card::from_id_unchecked(0); 5];
            let chosen = h
                .as_slice()
                .iter()
                .map(|&i| s.hole[i as usize])
                .chain(b.as_slice().iter().map(|&i| s.board[i as usize]));
            for (slot, card) in five.iter_mut().zip(chosen) {
                *slot = card;
            }
            visit(five);
        }
    }
}

/// Best high hand using exactly `choose_from_hole` hole cards and
/// `choose_from_board` board cards.
///
/// For Omaha this is the maximum over all `C(4,2) x C(5,3) = 60` hands.
pub fn evaluate_variant_high(
    hole: CardMask,
    board: CardMask,
    choose_from_hole: usize,
    choose_from_board: usize,
) -> Result<HandStrength> {
    let s = split(hole, board, choose_from_hole, choose_from_board)?;
    let mut best = HandStrength::new(HandCategory::HighCard, &[]);
    for_each_split(&s, choose_from_hole, |five| {
        best = best.max(evaluate_five(&five));
    });
    Ok(best)
}

/// Best eight-or-better low using exactly `choose_from_hole` hole cards
/// and `choose_from_board` board cards, or `NoQualifyingLow` when no
/// combination qualifies.
pub fn evaluate_variant_low(
    hole: CardMask,
    board: CardMask,
    choose_from_hole: usize,
    choose_from_board: usize,
) -> Result<LowResult> {
    let s = split(hole, board, choose_from_hole, choose_from_board)?;
    let mut best = LowResult::NoQualifyingLow;
    for_each_split(&s, choose_from_hole, |five| {
        let low = best_low(five);
        if low > best {
            best = low;
        }
    });
    Ok(best)
}
