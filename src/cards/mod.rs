//! Card primitives: cards, card masks, hands and the live deck.

pub mod card;
pub mod deck;
pub mod hand;
pub mod mask;

pub use card::Card;
pub use deck::Deck;
pub use hand::Hand;
pub use mask::{parse_cards, CardMask};
