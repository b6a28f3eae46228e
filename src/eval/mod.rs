//! Hand evaluation.
//!
//! - [`evaluate_high`]: best five of 5-7 cards, totally ordered [`HandStrength`]
//! - [`evaluate_low`]: ace-to-five eight-or-better low, or [`LowResult::NoQualifyingLow`]
//! - [`evaluate_variant_high`] / [`evaluate_variant_low`]: exact hole/board split search
//! - [`evaluate_many`]: parallel batch of high evaluations
//!
//! Every evaluation is a pure function of its inputs, so any number of
//! them can run concurrently.

pub mod combos;
pub mod high;
pub mod low;
pub mod strength;
pub mod variant;

pub use high::{evaluate_five, evaluate_high, evaluate_many};
pub use low::{evaluate_low, LowResult, LowStrength};
pub use strength::{HandCategory, HandStrength};
pub use variant::{evaluate_variant_high, evaluate_variant_low, GameVariant};
