//! Outs calculation.
//!
//! For a hole + board state, every unseen card is added to the board in
//! turn and the resulting best hand compared with the current one.

use crate::cards::{Card, CardMask};
use crate::error::{PokerError, Result};
use crate::eval::{evaluate_high, HandCategory};
use serde::Serialize;
use std::collections::BTreeMap;

/// Cards that would improve a hand, grouped by category.
///
/// A card is listed under every category above the current one, up to and
/// including the category it reaches. A card making a flush from a pair is
/// therefore also listed under two pair, trips and straight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutsResult {
    /// Category of the current best hand.
    pub current: HandCategory,
    by_category: BTreeMap<HandCategory, Vec<Card>>,
}

impl OutsResult {
    /// Cards reaching at least `category`, ascending id order.
    pub fn cards(&self, category: HandCategory) -> &[Card] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of cards reaching at least `category`.
    pub fn count(&self, category: HandCategory) -> usize {
        self.cards(category).len()
    }

    /// Categories with at least one out, worst first.
    pub fn categories(&self) -> impl Iterator<Item = HandCategory> + '_ {
        self.by_category.keys().copied()
    }

    /// Every card that improves the hand at all.
    pub fn improving_cards(&self) -> CardMask {
        self.by_category
            .values()
            .flatten()
            .fold(CardMask::EMPTY, |acc, &c| acc | CardMask::from_card(c))
    }

    /// Number of cards that improve the hand at all.
    pub fn total(&self) -> usize {
        self.improving_cards().count()
    }

    /// Whether no card improves the hand.
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

/// Calculate outs for hole cards on a board of three or more cards.
///
/// A state with seven known cards has nothing left to draw and returns an
/// empty result.
pub fn calculate_outs(hole: CardMask, board: CardMask) -> Result<OutsResult> {
    if hole.count() < 2 {
        return Err(PokerError::insufficient("2 or more hole", hole.count()));
    }
    if board.count() < 3 {
        return Err(PokerError::insufficient("3-5 board", board.count()));
    }
    if let Some(card) = hole.intersect(board).iter().next() {
        return Err(PokerError::DuplicateCard(card));
    }

    let known = hole | board;
    if known.count() > 7 {
        return Err(PokerError::insufficient("at most 7 known", known.count()));
    }
    let current = evaluate_high(known)?;
    let mut by_category: BTreeMap<HandCategory, Vec<Card>> = BTreeMap::new();
    if known.count() == 7 {
        return Ok(OutsResult {
            current: current.category(),
            by_category,
        });
    }

    for card in known.complement().iter() {
        let next = evaluate_high(known | CardMask::from_card(card))?;
        if next.category() <= current.category() {
            continue;
        }
        for category in HandCategory::ALL
            .iter()
            .filter(|&&c| c > current.category() && c <= next.category())
        {
            by_category.entry(*category).or_default().push(card);
        }
    }

    log::debug!(
        "outs for {} on {}: {} improving cards",
        hole,
        board,
        by_category.values().map(Vec::len).max().unwrap_or(0)
    );

    Ok(OutsResult {
        current: current.category(),
        by_category,
    })
}

/// Parse hole and board text, then calculate outs.
pub fn calculate_outs_str(hole: &str, board: &str) -> Result<OutsResult> {
    calculate_outs(CardMask::parse(hole)?, CardMask::parse(board)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_draw() {
        let outs = calculate_outs_str("As 2s", "Ks Qs 2d").unwrap();
        assert_eq!(outs.current, HandCategory::Pair);
        // 13 spades minus the 4 visible
        assert_eq!(outs.count(HandCategory::Flush), 9);
        for card in outs.cards(HandCategory::Flush) {
            assert_eq!(card.suit_char(), 's');
        }
    }

    #[test]
    fn test_open_ended_straight_draw() {
        let outs = calculate_outs_str("9c Tc", "Jd Qd 2s").unwrap();
        // Any 8 or K
        assert_eq!(outs.count(HandCategory::Straight), 8);
        assert_eq!(outs.count(HandCategory::Flush), 0);
    }

    #[test]
    fn test_categories_are_cumulative() {
        let outs = calculate_outs_str("As 2s", "Ks Qs 2d").unwrap();
        // Every flush card also reaches two pair or better
        assert!(outs.count(HandCategory::TwoPair) >= outs.count(HandCategory::Flush));
        let flush: Vec<Card> = outs.cards(HandCategory::Flush).to_vec();
        for card in flush {
            assert!(outs.cards(HandCategory::TwoPair).contains(&card));
        }
        // The pair itself is not an improvement
        assert_eq!(outs.count(HandCategory::Pair), 0);
        assert_eq!(outs.total(), outs.count(HandCategory::TwoPair));
    }

    #[test]
    fn test_turn_board() {
        let outs = calculate_outs_str("Ah Kh", "Qh Jh 2c 3d").unwrap();
        // Th makes a royal flush
        let th = Card::parse("Th").unwrap();
        assert!(outs.cards(HandCategory::StraightFlush).contains(&th));
        assert_eq!(outs.count(HandCategory::StraightFlush), 1);
        // Nine hearts left
        assert_eq!(outs.count(HandCategory::Flush), 9);
    }

    #[test]
    fn test_river_has_no_outs() {
        let outs = calculate_outs_str("As 2s", "Ks Qs 2d 7c 8h").unwrap();
        assert!(outs.is_empty());
        assert_eq!(outs.current, HandCategory::Pair);
    }

    #[test]
    fn test_invalid_states() {
        assert!(matches!(
            calculate_outs_str("As 2s", "Ks Qs"),
            Err(PokerError::InsufficientCards { .. })
        ));
        assert!(matches!(
            calculate_outs_str("As 2s", "As Qs 2d"),
            Err(PokerError::DuplicateCard(_))
        ));
        assert!(calculate_outs_str("As", "Ks Qs 2d").is_err());
    }
}
