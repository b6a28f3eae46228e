//! Live deck used for board completion and sampling.

use super::card::{Card, NUM_CARDS};
use super::mask::CardMask;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// The cards still available once known and dead cards are removed.
#[derive(Clone)]
pub struct Deck {
    /// Live cards, ascending id order until the first draw.
    cards: Vec<Card>,
    /// Cards excluded from this deck.
    dead: CardMask,
}

impl Deck {
    /// Create a full 52 card deck.
    pub fn new() -> Self {
        Self::without(CardMask::EMPTY)
    }

    /// Create a deck with specific cards removed.
    pub fn without(dead: CardMask) -> Self {
        let cards = dead.complement().to_vec();
        debug_assert!(cards.len() <= NUM_CARDS as usize);
        Self { cards, dead }
    }

    /// Number of live cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no live cards remain.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Live cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards removed from the deck.
    pub fn dead(&self) -> CardMask {
        self.dead
    }

    /// Draw `n` distinct random cards as a mask.
    ///
    /// Uses a partial Fisher-Yates shuffle so only `n` swaps are made. The
    /// deck keeps all its cards; only their order changes.
    pub fn draw<R: Rng>(&mut self, rng: &mut R, n: usize) -> CardMask {
        debug_assert!(n <= self.cards.len());
        let (drawn, _) = self.cards.partial_shuffle(rng, n);
        drawn
            .iter()
            .fold(CardMask::EMPTY, |acc, &c| acc | CardMask::from_card(c))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} live)", self.len())
    }
}
