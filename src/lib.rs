//! # Poker Equity
//!
//! Hand evaluation and equity calculation for hold'em and Omaha games,
//! including eight-or-better hi-lo splits.
//!
//! ## Features
//!
//! - **Evaluation**: best high hand from 5-7 cards, ace-to-five low,
//!   exact two-plus-three search for Omaha style games
//! - **Equity**: exact enumeration or seeded Monte Carlo across 2-12
//!   players, parallel over all cores with reproducible results
//! - **Ranges**: shorthand such as `TT+, AJs+, KQo` expanded to concrete
//!   combos, with range-vs-range equity
//! - **Board tools**: texture flags and outs by hand category
//!
//! ## Quick Start
//!
//! ```
//! use poker_equity::{calculate_equity_with, evaluate_high, CardMask, EquityConfig,
//!                    EquityRequest, GameVariant, HandCategory};
//!
//! let royal = evaluate_high(CardMask::parse("As Ks Qs Js Ts")?)?;
//! assert_eq!(royal.category(), HandCategory::StraightFlush);
//!
//! let request = EquityRequest::parse(&["As Ad", "Ks Kd"], "", "", GameVariant::Holdem)?;
//! let config = EquityConfig::monte_carlo(10_000).with_seed(7);
//! let result = calculate_equity_with(&request, &config)?;
//! assert!(result.players[0].equity > 75.0);
//! # Ok::<(), poker_equity::PokerError>(())
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: cards, card masks, hands and the live deck
//! - [`eval`]: high, low and variant-aware hand evaluation
//! - [`range`]: range notation expansion
//! - [`board`]: board texture analysis
//! - [`outs`]: outs by hand category
//! - [`equity`]: exact and Monte Carlo equity
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Equity Engine                           │
//! │  - Exact enumeration      - Seeded Monte Carlo chunks           │
//! │  - Hi-lo pot splitting    - Range vs range                      │
//! └─────────────────────────────────────────────────────────────────┘
//!                │                      │                  │
//!                ▼                      ▼                  ▼
//!         ┌─────────────┐        ┌────────────┐     ┌────────────┐
//!         │  Evaluator  │        │   Ranges   │     │   Config   │
//!         │  high / low │        │  AA, AKs+  │     │ seed, pool │
//!         └─────────────┘        └────────────┘     └────────────┘
//!                │                      │
//!                ▼                      ▼
//!         ┌──────────────────────────────────────┐
//!         │   Card / CardMask / Hand / Deck      │◄── Board texture, Outs
//!         └──────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

/// Board texture analysis.
pub mod board;

/// Card primitives.
///
/// Cards, 64-bit card masks, ordered hands and the live deck.
pub mod cards;

/// Equity engine configuration.
pub mod config;

/// Equity calculation.
///
/// Exact and Monte Carlo equity for hands and ranges.
pub mod equity;

/// Error types.
pub mod error;

/// Hand evaluation.
pub mod eval;

/// Outs calculation.
pub mod outs;

/// Range notation.
pub mod range;

// Re-export commonly used types at crate root for convenience
pub use board::BoardTexture;
pub use cards::{Card, CardMask, Deck, Hand};
pub use config::EquityConfig;
pub use equity::{
    calculate_equity, calculate_equity_with, calculate_range_equity, EquityRequest,
    EquityResult, LowStats, PlayerEquity, RangeEquityResult,
};
pub use error::{ConfigError, PokerError, Result};
pub use eval::{
    evaluate_five, evaluate_high, evaluate_low, evaluate_many, evaluate_variant_high,
    evaluate_variant_low, GameVariant, HandCategory, HandStrength, LowResult, LowStrength,
};
pub use outs::{calculate_outs, calculate_outs_str, OutsResult};
pub use range::HandRange;
