//! Hand range utilities.
//!
//! This module expands shorthand range notation into the concrete
//! two-card combinations it denotes:
//!
//! | Notation   | Meaning                               | Combos |
//! |------------|---------------------------------------|--------|
//! | `AA`       | pocket aces                           | 6      |
//! | `AKs`      | ace-king suited                       | 4      |
//! | `AKo`      | ace-king offsuit                      | 12     |
//! | `AK`       | suited and offsuit                    | 16     |
//! | `TT+`      | TT, JJ, QQ, KK, AA                    | 30     |
//! | `AJs+`     | AJs, AQs, AKs                         | 12     |
//! | `99-66`    | 99, 88, 77, 66                        | 24     |
//! | `KJs-K9s`  | KJs, KTs, K9s                         | 12     |
//! | `AhKh`     | exactly that combo                    | 1      |
//!
//! Parts are comma separated; a combo listed twice is kept once. Every
//! combo carries the same weight.

use crate::cards::card::{rank_char, rank_from_char, NUM_SUITS, RANK_A};
use crate::cards::{parse_cards, Card, CardMask, Hand};
use crate::error::{PokerError, Result};
use rustc_hash::FxHashSet;
use std::fmt;

/// A set of concrete two-card combos built from range notation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HandRange {
    /// The notation this range was built from.
    notation: String,
    /// Combos in first-seen order.
    combos: Vec<Hand>,
}

impl HandRange {
    /// Create an empty range.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a range from notation, e.g. "AA, AKs, 98s+".
    pub fn parse(notation: &str) -> Result<Self> {
        let mut builder = Builder::default();

        for part in notation.split(',').map(|s| s.trim()) {
            if part.is_empty() {
                continue;
            }
            parse_part(&mut builder, part)?;
        }

        if builder.combos.is_empty() {
            return Err(PokerError::RangeParse(format!("empty range {:?}", notation)));
        }

        Ok(Self {
            notation: notation.trim().to_string(),
            combos: builder.combos,
        })
    }

    /// Parse a range and drop every combo that shares a card with `blocked`.
    ///
    /// The result may be empty when every combo is blocked.
    pub fn expand(notation: &str, blocked: CardMask) -> Result<Self> {
        Ok(Self::parse(notation)?.without_blocked(blocked))
    }

    /// Copy of this range without combos that touch `blocked`.
    pub fn without_blocked(&self, blocked: CardMask) -> Self {
        Self {
            notation: self.notation.clone(),
            combos: self
                .combos
                .iter()
                .filter(|h| !h.mask().overlaps(blocked))
                .cloned()
                .collect(),
        }
    }

    /// Concrete combos.
    pub fn combos(&self) -> &[Hand] {
        &self.combos
    }

    /// Combos as card masks.
    pub fn masks(&self) -> Vec<CardMask> {
        self.combos.iter().map(|h| h.mask()).collect()
    }

    /// Number of combos.
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    /// Whether the range holds no combos.
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// Check if a two-card mask is one of the combos.
    pub fn contains(&self, combo: CardMask) -> bool {
        self.combos.iter().any(|h| h.mask() == combo)
    }

    /// The notation this range was built from.
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Add every combo of `other` not already present.
    pub fn merge(&mut self, other: &HandRange) {
        let mut seen: FxHashSet<CardMask> = self.combos.iter().map(|h| h.mask()).collect();
        for hand in &other.combos {
            if seen.insert(hand.mask()) {
                self.combos.push(hand.clone());
            }
        }
        if self.notation.is_empty() {
            self.notation = other.notation.clone();
        } else if !other.notation.is_empty() {
            self.notation = format!("{}, {}", self.notation, other.notation);
        }
    }
}

impl fmt::Display for HandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}

impl fmt::Debug for HandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandRange({:?}, {} combos)", self.notation, self.combos.len())
    }
}

/// Collects combos while skipping duplicates.
#[derive(Default)]
struct Builder {
    seen: FxHashSet<CardMask>,
    combos: Vec<Hand>,
}

impl Builder {
    fn push(&mut self, a: Card, b: Card) -> Result<()> {
        let hand = Hand::from_cards(&[a, b])?;
        if self.seen.insert(hand.mask()) {
            self.combos.push(hand);
        }
        Ok(())
    }

    /// All 6 combos of a pocket pair.
    fn add_pair(&mut self, rank: u8) -> Result<()> {
        for s1 in 0..NUM_SUITS {
            for s2 in (s1 + 1)..NUM_SUITS {
                self.push(Card::new(rank, s1)?, Card::new(rank, s2)?)?;
            }
        }
        Ok(())
    }

    /// The 4 suited or 12 offsuit combos of two distinct ranks.
    fn add_unpaired(&mut self, high: u8, low: u8, suitedness: Suitedness) -> Result<()> {
        for s1 in 0..NUM_SUITS {
            for s2 in 0..NUM_SUITS {
                let suited = s1 == s2;
                let wanted = match suitedness {
                    Suitedness::Suited => suited,
                    Suitedness::Offsuit => !suited,
                    Suitedness::Any => true,
                };
                if wanted {
                    self.push(Card::new(high, s1)?, Card::new(low, s2)?)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suitedness {
    Suited,
    Offsuit,
    Any,
}

/// A parsed two-rank token such as "AKs" or "77".
#[derive(Debug, Clone, Copy)]
struct Token {
    high: u8,
    low: u8,
    suitedness: Suitedness,
}

impl Token {
    fn is_pair(&self) -> bool {
        self.high == self.low
    }
}

/// Parse a single part of range notation.
fn parse_part(builder: &mut Builder, part: &str) -> Result<()> {
    // Explicit cards, e.g. "AhKh"
    if is_explicit_combo(part) {
        let cards = parse_cards(part)?;
        if cards[0] == cards[1] {
            return Err(PokerError::DuplicateCard(cards[0]));
        }
        return builder.push(cards[0], cards[1]);
    }

    // Dash notation, e.g. "KJs-K9s"
    if let Some((start, end)) = part.split_once('-') {
        return parse_dash(builder, start.trim(), end.trim(), part);
    }

    // Plus notation, e.g. "TT+" or "AQs+"
    if let Some(base) = part.strip_suffix('+') {
        return parse_plus(builder, base.trim(), part);
    }

    let token = parse_token(part)?;
    add_token(builder, token)
}

fn is_explicit_combo(part: &str) -> bool {
    let chars: Vec<char> = part.chars().collect();
    chars.len() == 4 && is_suit_char(chars[1]) && is_suit_char(chars[3])
}

fn is_suit_char(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'h' | 'd' | 'c' | 's')
}

/// Parse a hand token like "AA", "AKs", "AKo", "AK".
fn parse_token(text: &str) -> Result<Token> {
    let chars: Vec<char> = text.chars().collect();

    if chars.len() < 2 || chars.len() > 3 {
        return Err(PokerError::RangeParse(format!("invalid hand format: {}", text)));
    }

    let r1 = parse_rank(chars[0], text)?;
    let r2 = parse_rank(chars[1], text)?;
    let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };

    let suitedness = match chars.get(2) {
        None => Suitedness::Any,
        Some('s') | Some('S') => Suitedness::Suited,
        Some('o') | Some('O') => Suitedness::Offsuit,
        Some(c) => {
            return Err(PokerError::RangeParse(format!(
                "invalid suffix {:?} in {} (expected 's' or 'o')",
                c, text
            )))
        }
    };

    if high == low && suitedness != Suitedness::Any {
        return Err(PokerError::RangeParse(format!("invalid suffix for pair: {}", text)));
    }

    Ok(Token {
        high,
        low,
        suitedness,
    })
}

fn parse_rank(c: char, text: &str) -> Result<u8> {
    rank_from_char(c)
        .ok_or_else(|| PokerError::RangeParse(format!("invalid rank {:?} in {}", c, text)))
}

fn add_token(builder: &mut Builder, token: Token) -> Result<()> {
    if token.is_pair() {
        builder.add_pair(token.high)
    } else {
        builder.add_unpaired(token.high, token.low, token.suitedness)
    }
}

/// Parse plus notation like "TT+" or "AQs+".
fn parse_plus(builder: &mut Builder, base: &str, part: &str) -> Result<()> {
    let token = parse_token(base).map_err(|_| {
        PokerError::RangeParse(format!("invalid plus notation: {}", part))
    })?;

    if token.is_pair() {
        // Pairs: TT+ means TT, JJ, QQ, KK, AA
        for rank in token.high..=RANK_A {
            builder.add_pair(rank)?;
        }
    } else {
        // Non-pairs: AQs+ means AQs, AKs
        for kicker in token.low..token.high {
            builder.add_unpaired(token.high, kicker, token.suitedness)?;
        }
    }

    Ok(())
}

/// Parse range notation like "A5s-A2s" or "99-66".
fn parse_dash(builder: &mut Builder, start: &str, end: &str, part: &str) -> Result<()> {
    let invalid = |why: &str| PokerError::RangeParse(format!("{}: {}", why, part));

    let a = parse_token(start).map_err(|_| invalid("invalid range start"))?;
    let b = parse_token(end).map_err(|_| invalid("invalid range end"))?;

    if a.suitedness != b.suitedness {
        return Err(invalid("range limits must have the same suffix"));
    }

    match (a.is_pair(), b.is_pair()) {
        (true, true) => {
            let (lo, hi) = (a.high.min(b.high), a.high.max(b.high));
            for rank in lo..=hi {
                builder.add_pair(rank)?;
            }
            Ok(())
        }
        (false, false) => {
            if a.high != b.high {
                return Err(invalid("range limits must share the same high card"));
            }
            let (lo, hi) = (a.low.min(b.low), a.low.max(b.low));
            for kicker in lo..=hi {
                builder.add_unpaired(a.high, kicker, a.suitedness)?;
            }
            Ok(())
        }
        _ => Err(invalid("cannot mix pairs and non-pairs in a range")),
    }
}

/// Shorthand name of a two-card combo ("AA", "AKs", "AKo").
pub fn combo_class(hand: &Hand) -> Option<String> {
    let cards = hand.cards();
    if cards.len() != 2 {
        return None;
    }
    let (hi, lo) = if cards[0].rank() >= cards[1].rank() {
        (cards[0], cards[1])
    } else {
        (cards[1], cards[0])
    };
    let mut name = format!("{}{}", rank_char(hi.rank()), rank_char(lo.rank()));
    if hi.rank() != lo.rank() {
        name.push(if hi.suit() == lo.suit() { 's' } else { 'o' });
    }
    Some(name)
}
