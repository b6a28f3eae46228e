//! An ordered collection of unique cards.

use super::card::Card;
use super::mask::{parse_cards, CardMask};
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Cards in insertion order, backed by a [`CardMask`] for O(1) duplicate checks.
///
/// Renders in insertion order, space separated ("As Kd Qh").
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
    mask: CardMask,
}

impl Hand {
    /// Create an empty hand.
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(7),
            mask: CardMask::EMPTY,
        }
    }

    /// Parse a hand from text like "As Ks" or "AsKs".
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_cards(&parse_cards(text)?)
    }

    /// Build a hand from cards, rejecting repeats.
    pub fn from_cards(cards: &[Card]) -> Result<Self> {
        let mut hand = Self::new();
        for &card in cards {
            hand.add(card)?;
        }
        Ok(hand)
    }

    /// Append a card. Fails with `DuplicateCard` if it is already present.
    pub fn add(&mut self, card: Card) -> Result<()> {
        self.mask.insert(card)?;
        self.cards.push(card);
        Ok(())
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Backing mask.
    pub fn mask(&self) -> CardMask {
        self.mask
    }

    /// Check if the hand holds a card.
    pub fn contains(&self, card: Card) -> bool {
        self.mask.contains(card)
    }
}

impl FromStr for Hand {
    type Err = crate::error::PokerError;

    fn from_str(s: &str) -> Result<Self> {
        Hand::parse(s)
    }
}

impl Serialize for Hand {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Hand::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PokerError;

    #[test]
    fn test_parse_and_render() {
        let hand = Hand::parse("As Kd Qh").unwrap();
        assert_eq!(hand.len(), 3);
        assert_eq!(hand.to_string(), "As Kd Qh");

        // Concatenated input renders in the same insertion order
        let hand = Hand::parse("QhAsKd").unwrap();
        assert_eq!(hand.to_string(), "Qh As Kd");
        assert_eq!(hand.mask().count(), 3);
    }

    #[test]
    fn test_duplicate_card() {
        let err = Hand::parse("As As").unwrap_err();
        assert_eq!(err, PokerError::DuplicateCard(Card::parse("As").unwrap()));

        let mut hand = Hand::parse("As").unwrap();
        let res = hand.add(Card::parse("As").unwrap());
        assert!(matches!(res, Err(PokerError::DuplicateCard(_))));
        // Rejected mutation leaves the hand unchanged
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_incremental_build() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());
        hand.add(Card::parse("2c").unwrap()).unwrap();
        hand.add(Card::parse("Th").unwrap()).unwrap();
        assert_eq!(hand.len(), 2);
        assert!(hand.contains(Card::parse("Th").unwrap()));
        assert!(!hand.contains(Card::parse("Ts").unwrap()));
    }

    #[test]
    fn test_serde_as_text() {
        let hand = Hand::parse("Kd As").unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(json, "\"Kd As\"");
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hand);
    }

    #[test]
    fn test_invalid_code() {
        assert!(matches!(Hand::parse("As Xx"), Err(PokerError::InvalidCardCode(_))));
    }
}
