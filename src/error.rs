//! Error types shared by every component of the engine.
//!
//! All errors are surfaced synchronously to the caller. Nothing in the
//! library retries, since pure computation has no transient failure mode.
//! Note that a missing low hand is not an error; see [`crate::eval::LowResult`].

use crate::cards::Card;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PokerError>;

/// Errors produced while parsing, evaluating or running equity queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PokerError {
    /// Malformed card text, e.g. "Xs" or "A".
    #[error("invalid card code: {0:?}")]
    InvalidCardCode(String),

    /// The same physical card was referenced twice.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),

    /// Wrong number of cards for the requested operation.
    #[error("expected {expected} cards, found {found}")]
    InsufficientCards {
        /// Human readable description of what was expected ("5-7", "4 hole").
        expected: String,
        /// Number of cards actually supplied.
        found: usize,
    },

    /// Malformed range notation.
    #[error("invalid range notation: {0}")]
    RangeParse(String),

    /// A range is empty once blocked cards are removed.
    #[error("range {0:?} has no combos left after removing blocked cards")]
    EmptyRange(String),

    /// Equity queries need between 2 and 12 players.
    #[error("need 2-{max} players, got {found}")]
    InvalidPlayerCount {
        /// Number of hands supplied.
        found: usize,
        /// Maximum supported players.
        max: usize,
    },

    /// Unknown game variant name.
    #[error("unsupported game variant: {0}")]
    UnsupportedVariant(String),

    /// Invalid engine configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A dedicated worker pool could not be started.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl PokerError {
    pub(crate) fn insufficient(expected: impl Into<String>, found: usize) -> Self {
        PokerError::InsufficientCards {
            expected: expected.into(),
            found,
        }
    }
}

/// Errors that can occur when validating an [`crate::EquityConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Monte Carlo needs at least one iteration.
    #[error("iterations must be greater than zero")]
    ZeroIterations,
    /// A thread pool of size zero cannot run anything.
    #[error("thread count must be greater than zero")]
    ZeroThreads,
    /// Monte Carlo chunks must hold at least one trial.
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
}
