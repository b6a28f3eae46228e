//! 64-bit card set.
//!
//! Bit `i` is set when the card with canonical id `i` is present. Only
//! the low 52 bits are meaningful. Every operation is a handful of word
//! operations, independent of how many cards are in the set.

use super::card::{Card, NUM_RANKS};
use crate::error::{PokerError, Result};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Mask of the 52 valid card bits.
const DECK_BITS: u64 = (1u64 << 52) - 1;

/// Mask of the 13 rank bits of one suit.
const SUIT_BITS: u64 = (1u64 << NUM_RANKS) - 1;

/// A set of cards packed in a `u64`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardMask(u64);

impl CardMask {
    /// The empty set.
    pub const EMPTY: CardMask = CardMask(0);

    /// All 52 cards.
    pub const FULL_DECK: CardMask = CardMask(DECK_BITS);

    /// Create a mask from raw bits, dropping anything above bit 51.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        CardMask(bits & DECK_BITS)
    }

    /// Mask with a single card.
    #[inline]
    pub fn from_card(card: Card) -> Self {
        CardMask(card.bit())
    }

    /// Build a mask from cards, failing if any card appears twice.
    pub fn from_cards(cards: &[Card]) -> Result<Self> {
        let mut mask = CardMask::EMPTY;
        for &card in cards {
            mask.insert(card)?;
        }
        Ok(mask)
    }

    /// Parse a whitespace, comma or concatenation delimited card list.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_cards(&parse_cards(text)?)
    }

    /// Raw bits.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Add a card, rejecting it if already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> Result<()> {
        if self.contains(card) {
            return Err(PokerError::DuplicateCard(card));
        }
        self.0 |= card.bit();
        Ok(())
    }

    /// Union of two sets.
    #[inline]
    pub fn union(self, other: CardMask) -> CardMask {
        CardMask(self.0 | other.0)
    }

    /// Intersection of two sets.
    #[inline]
    pub fn intersect(self, other: CardMask) -> CardMask {
        CardMask(self.0 & other.0)
    }

    /// Cards of `self` not in `other`.
    #[inline]
    pub fn without(self, other: CardMask) -> CardMask {
        CardMask(self.0 & !other.0)
    }

    /// Cards of the full deck not in this set.
    #[inline]
    pub fn complement(self) -> CardMask {
        CardMask(!self.0 & DECK_BITS)
    }

    /// Number of cards in the set.
    #[inline]
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & card.bit() != 0
    }

    /// Whether the two sets share any card.
    #[inline]
    pub fn overlaps(&self, other: CardMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Rank bits (bit r set when some card of rank r is present) for one suit.
    #[inline]
    pub fn suit_bits(&self, suit: u8) -> u16 {
        ((self.0 >> (suit as u32 * NUM_RANKS as u32)) & SUIT_BITS) as u16
    }

    /// Rank bits over all suits.
    #[inline]
    pub fn rank_bits(&self) -> u16 {
        (0..4).fold(0u16, |acc, s| acc | self.suit_bits(s))
    }

    /// Iterate cards in ascending id order.
    pub fn iter(&self) -> MaskIter {
        MaskIter(self.0)
    }

    /// Collect the cards into a vector, ascending id order.
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }
}

/// Iterator over the cards of a mask.
#[derive(Debug, Clone)]
pub struct MaskIter(u64);

impl Iterator for MaskIter {
    type Item = Card;

    #[inline]
    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let id = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Card::from_id_unchecked(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MaskIter {}

impl IntoIterator for CardMask {
    type Item = Card;
    type IntoIter = MaskIter;

    fn into_iter(self) -> MaskIter {
        self.iter()
    }
}

impl BitOr for CardMask {
    type Output = CardMask;

    fn bitor(self, rhs: CardMask) -> CardMask {
        self.union(rhs)
    }
}

impl BitOrAssign for CardMask {
    fn bitor_assign(&mut self, rhs: CardMask) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CardMask {
    type Output = CardMask;

    fn bitand(self, rhs: CardMask) -> CardMask {
        self.intersect(rhs)
    }
}

impl BitAndAssign for CardMask {
    fn bitand_assign(&mut self, rhs: CardMask) {
        self.0 &= rhs.0;
    }
}

impl From<Card> for CardMask {
    fn from(card: Card) -> Self {
        CardMask::from_card(card)
    }
}

impl fmt::Display for CardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Parse card codes separated by whitespace or commas, or written back to
/// back ("AsKd", "As Kd", "As,Kd"). Order is preserved; duplicates are not
/// checked here.
pub fn parse_cards(text: &str) -> Result<Vec<Card>> {
    let mut cards = Vec::new();
    for token in text.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        if token.chars().count() % 2 != 0 {
            return Err(PokerError::InvalidCardCode(token.to_string()));
        }
        let chars: Vec<char> = token.chars().collect();
        for pair in chars.chunks(2) {
            let code: String = pair.iter().collect();
            cards.push(Card::parse(&code)?);
        }
    }
    Ok(cards)
}
