//! Equity query inputs and their validation.

use super::counters::MAX_PLAYERS;
use crate::cards::{CardMask, Hand};
use crate::error::{PokerError, Result};
use crate::eval::GameVariant;

/// Cards on a full board.
pub const BOARD_CARDS: usize = 5;

/// The known state of a hand: every player's hole cards, the partial
/// board and any dead cards.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityRequest {
    /// Hole cards per player.
    pub hands: Vec<Hand>,
    /// Board cards already dealt, 0 to 5.
    pub board: CardMask,
    /// Cards known to be out of play.
    pub dead: CardMask,
    /// Game being played.
    pub variant: GameVariant,
}

impl EquityRequest {
    /// A preflop request with no dead cards.
    pub fn new(hands: Vec<Hand>, variant: GameVariant) -> Self {
        Self {
            hands,
            board: CardMask::EMPTY,
            dead: CardMask::EMPTY,
            variant,
        }
    }

    /// Parse hands, board and dead cards from text.
    pub fn parse<S: AsRef<str>>(
        hands: &[S],
        board: &str,
        dead: &str,
        variant: GameVariant,
    ) -> Result<Self> {
        let hands = hands
            .iter()
            .map(|h| Hand::parse(h.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            hands,
            board: CardMask::parse(board)?,
            dead: CardMask::parse(dead)?,
            variant,
        })
    }

    /// Set the partial board.
    pub fn with_board(mut self, board: CardMask) -> Self {
        self.board = board;
        self
    }

    /// Set the dead cards.
    pub fn with_dead(mut self, dead: CardMask) -> Self {
        self.dead = dead;
        self
    }

    /// Hole cards as masks, in player order.
    pub fn holes(&self) -> Vec<CardMask> {
        self.hands.iter().map(Hand::mask).collect()
    }

    /// Board cards still to come.
    pub fn missing_board_cards(&self) -> usize {
        BOARD_CARDS.saturating_sub(self.board.count())
    }

    /// Check the request and return the mask of every known card.
    pub fn validate(&self) -> Result<CardMask> {
        let players = self.hands.len();
        if !(2..=MAX_PLAYERS).contains(&players) {
            return Err(PokerError::InvalidPlayerCount {
                found: players,
                max: MAX_PLAYERS,
            });
        }

        let hole_cards = self.variant.hole_cards();
        for hand in &self.hands {
            if hand.len() != hole_cards {
                return Err(PokerError::insufficient(
                    format!("{} hole", hole_cards),
                    hand.len(),
                ));
            }
        }

        if self.board.count() > BOARD_CARDS {
            return Err(PokerError::insufficient("0-5 board", self.board.count()));
        }

        let mut known = CardMask::EMPTY;
        let parts = self
            .hands
            .iter()
            .map(Hand::mask)
            .chain([self.board, self.dead]);
        for part in parts {
            if let Some(card) = known.intersect(part).iter().next() {
                return Err(PokerError::DuplicateCard(card));
            }
            known |= part;
        }

        let live = known.complement().count();
        let missing = self.missing_board_cards();
        if live < missing {
            return Err(PokerError::insufficient(
                format!("{} live", missing),
                live,
            ));
        }

        Ok(known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_parse_and_validate() {
        let request =
            EquityRequest::parse(&["As Ad", "Ks Kd"], "2c 7h 9d", "", GameVariant::Holdem)
                .unwrap();
        assert_eq!(request.missing_board_cards(), 2);
        let known = request.validate().unwrap();
        assert_eq!(known.count(), 7);
    }

    #[test]
    fn test_duplicates_across_arguments() {
        let ks = Card::parse("Ks").unwrap();

        let request =
            EquityRequest::parse(&["As Ks", "Ks Kd"], "", "", GameVariant::Holdem).unwrap();
        assert_eq!(request.validate(), Err(PokerError::DuplicateCard(ks)));

        let request =
            EquityRequest::parse(&["As Ad", "Qs Qd"], "Ks 2c 3c", "Ks", GameVariant::Holdem)
                .unwrap();
        assert_eq!(request.validate(), Err(PokerError::DuplicateCard(ks)));
    }

    #[test]
    fn test_player_count() {
        let request = EquityRequest::parse(&["As Ad"], "", "", GameVariant::Holdem).unwrap();
        assert_eq!(
            request.validate(),
            Err(PokerError::InvalidPlayerCount { found: 1, max: 12 })
        );
    }

    #[test]
    fn test_hole_counts_follow_variant() {
        let request =
            EquityRequest::parse(&["As Ad", "Ks Kd"], "", "", GameVariant::Omaha).unwrap();
        assert!(matches!(
            request.validate(),
            Err(PokerError::InsufficientCards { found: 2, .. })
        ));
    }

    #[test]
    fn test_not_enough_live_cards() {
        // Twelve Omaha hands leave four cards for a five card board
        let deck: Vec<String> = Card::all().map(|c| c.to_string()).collect();
        let hands: Vec<String> = deck.chunks(4).take(12).map(|c| c.join(" ")).collect();
        let request = EquityRequest::parse(&hands, "", "", GameVariant::Omaha).unwrap();
        assert!(matches!(
            request.validate(),
            Err(PokerError::InsufficientCards { found: 4, .. })
        ));
    }
}
