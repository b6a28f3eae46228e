//! Card representation.
//!
//! A card is identified by a canonical id in `0..52` computed as
//! `rank + suit * 13`, where rank `0..13` maps 2..A and suit `0..4`
//! maps hearts, diamonds, clubs, spades. The same id is the bit position
//! used by [`super::CardMask`].

use crate::error::{PokerError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Rank indices (0-12: 2-A).
pub const RANK_2: u8 = 0;
pub const RANK_3: u8 = 1;
pub const RANK_4: u8 = 2;
pub const RANK_5: u8 = 3;
pub const RANK_6: u8 = 4;
pub const RANK_7: u8 = 5;
pub const RANK_8: u8 = 6;
pub const RANK_9: u8 = 7;
pub const RANK_T: u8 = 8;
pub const RANK_J: u8 = 9;
pub const RANK_Q: u8 = 10;
pub const RANK_K: u8 = 11;
pub const RANK_A: u8 = 12;

/// Suit of a card (0-3).
pub const SUIT_HEARTS: u8 = 0;
pub const SUIT_DIAMONDS: u8 = 1;
pub const SUIT_CLUBS: u8 = 2;
pub const SUIT_SPADES: u8 = 3;

/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of cards in a standard deck.
pub const NUM_CARDS: u8 = 52;

/// Rank characters for display.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display.
const SUIT_CHARS: [char; 4] = ['h', 'd', 'c', 's'];

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// Card index 0-51: rank + suit * 13
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit (0-3).
    pub fn new(rank: u8, suit: u8) -> Result<Self> {
        if rank >= NUM_RANKS || suit >= NUM_SUITS {
            return Err(PokerError::InvalidCardCode(format!("rank {rank}, suit {suit}")));
        }
        Ok(Self {
            id: rank + suit * NUM_RANKS,
        })
    }

    /// Create a card from its ID (0-51).
    pub fn from_id(id: u8) -> Result<Self> {
        if id >= NUM_CARDS {
            return Err(PokerError::InvalidCardCode(format!("id {id}")));
        }
        Ok(Self { id })
    }

    /// Build a card from an id already known to be in range.
    #[inline]
    pub(crate) const fn from_id_unchecked(id: u8) -> Self {
        debug_assert!(id < NUM_CARDS);
        Self { id }
    }

    /// Parse a card from a two character code like "As", "Kh", "2c".
    ///
    /// The rank is case-insensitive; so is the suit.
    pub fn parse(code: &str) -> Result<Self> {
        let mut chars = code.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PokerError::InvalidCardCode(code.to_string()));
        };

        let rank = rank_from_char(r).ok_or_else(|| PokerError::InvalidCardCode(code.to_string()))?;
        let suit = SUIT_CHARS
            .iter()
            .position(|&c| c == s.to_ascii_lowercase())
            .ok_or_else(|| PokerError::InvalidCardCode(code.to_string()))?;

        Self::new(rank, suit as u8)
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (0-12: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id % NUM_RANKS
    }

    /// Get the card's suit (0-3).
    #[inline]
    pub fn suit(&self) -> u8 {
        self.id / NUM_RANKS
    }

    /// Single bit for this card in a 64-bit mask.
    #[inline]
    pub fn bit(&self) -> u64 {
        1u64 << self.id
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Get suit character for display.
    pub fn suit_char(&self) -> char {
        SUIT_CHARS[self.suit() as usize]
    }

    /// All 52 cards in id order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..NUM_CARDS).map(Card::from_id_unchecked)
    }
}

/// Parse a single rank character, accepting lower case.
pub fn rank_from_char(c: char) -> Option<u8> {
    RANK_CHARS
        .iter()
        .position(|&r| r == c.to_ascii_uppercase())
        .map(|r| r as u8)
}

/// Rank character for a rank index.
pub fn rank_char(rank: u8) -> char {
    RANK_CHARS[(rank % NUM_RANKS) as usize]
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self> {
        Card::parse(s)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Card::parse(&code).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(RANK_A, SUIT_SPADES).unwrap();
        assert_eq!(ace_spades.rank(), RANK_A);
        assert_eq!(ace_spades.suit(), SUIT_SPADES);
        assert_eq!(ace_spades.id(), 12 + 3 * 13);
        assert_eq!(ace_spades.to_string(), "As");

        let two_hearts = Card::new(RANK_2, SUIT_HEARTS).unwrap();
        assert_eq!(two_hearts.id(), 0);
        assert_eq!(two_hearts.to_string(), "2h");

        assert!(Card::new(13, 0).is_err());
        assert!(Card::new(0, 4).is_err());
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!(Card::parse("As").unwrap().to_string(), "As");
        assert_eq!(Card::parse("kh").unwrap().to_string(), "Kh");
        assert_eq!(Card::parse("2C").unwrap().to_string(), "2c");
        assert_eq!("Td".parse::<Card>().unwrap().to_string(), "Td");
    }

    #[test]
    fn test_invalid_codes() {
        for code in ["XX", "A", "Asd", "", "1s", "Ax"] {
            assert_eq!(
                Card::parse(code),
                Err(PokerError::InvalidCardCode(code.to_string())),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: Vec<u8> = Card::all().map(|c| c.id()).collect();
        assert_eq!(ids.len(), 52);
        for (i, card) in Card::all().enumerate() {
            assert_eq!(card.id() as usize, i);
            assert_eq!(Card::new(card.rank(), card.suit()).unwrap(), card);
            assert_eq!(Card::parse(&card.to_string()).unwrap(), card);
        }
        assert!(Card::from_id(52).is_err());
    }

    #[test]
    fn test_serde_as_code() {
        let card = Card::parse("Qd").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Qd\"");
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
    }
}
