//! Equity engine.
//!
//! An equity query scores every player's best hand on many completions of
//! the board and tallies wins, ties and losses. Two modes are available:
//!
//! - exact: every completion from the live cards, split across workers by
//!   the first card drawn ([`exact`])
//! - Monte Carlo: a fixed number of random completions drawn in seeded
//!   chunks ([`monte_carlo`])
//!
//! Workers own their [`EquityCounters`] and are merged once at the end by
//! integer addition. Pot shares are tracked in [`POT_UNITS`] per showdown,
//! so split pots never lose precision.
//!
//! # Example
//! ```
//! use poker_equity::{calculate_equity_with, EquityConfig, EquityRequest, GameVariant};
//!
//! let request = EquityRequest::parse(&["As Ad", "Ks Kd"], "2c 7h 9d Jc", "", GameVariant::Holdem)?;
//! let result = calculate_equity_with(&request, &EquityConfig::exact())?;
//! assert_eq!(result.samples, 44);
//! # Ok::<(), poker_equity::PokerError>(())
//! ```

pub mod counters;
pub mod exact;
pub mod monte_carlo;
pub mod range_equity;
pub mod request;
pub mod result;

pub use counters::{EquityCounters, PlayerCounters, MAX_PLAYERS, POT_UNITS};
pub use range_equity::calculate_range_equity;
pub use request::EquityRequest;
pub use result::{EquityResult, LowStats, PlayerEquity, RangeEquityResult};

use crate::cards::{CardMask, Hand};
use crate::config::EquityConfig;
use crate::error::{PokerError, Result};
use crate::eval::GameVariant;

/// Run `op` on a dedicated pool of `threads` workers, or on the global
/// rayon pool when `threads` is `None`.
pub(crate) fn run_with_threads<T, F>(threads: Option<usize>, op: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> Result<T> + Send,
{
    match threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| PokerError::ThreadPool(e.to_string()))?;
            pool.install(op)
        }
        None => op(),
    }
}

/// Equity of every hand in `request`.
///
/// A complete board is always evaluated exactly, whatever the mode.
pub fn calculate_equity_with(
    request: &EquityRequest,
    config: &EquityConfig,
) -> Result<EquityResult> {
    config.validate()?;
    let known = request.validate()?;
    let holes = request.holes();
    let missing = request.missing_board_cards();
    let exhaustive = !config.use_monte_carlo || missing == 0;

    if exhaustive {
        log::debug!(
            "{} players, {}: enumerating {} boards",
            holes.len(),
            request.variant,
            exact::board_count(request.board, known)
        );
    }

    let counters = run_with_threads(config.num_threads, || {
        if exhaustive {
            exact::enumerate_boards(request.variant, &holes, request.board, known)
        } else {
            monte_carlo::sample_boards(request.variant, &holes, request.board, known, config)
        }
    })?;

    let result = EquityResult::from_counters(
        &request.hands,
        &counters,
        exhaustive,
        request.variant.is_hi_lo(),
    );
    log::info!(
        "{} {} players: {} samples ({})",
        request.variant,
        holes.len(),
        result.samples,
        if exhaustive { "exact" } else { "sampled" }
    );
    Ok(result)
}

/// Equity of `hands` given dead cards and a partial board.
///
/// Runs on all available cores; see [`calculate_equity_with`] for control
/// over threads and chunking.
pub fn calculate_equity(
    hands: &[Hand],
    dead: CardMask,
    board: CardMask,
    variant: GameVariant,
    use_monte_carlo: bool,
    iterations: u64,
    seed: Option<u64>,
) -> Result<EquityResult> {
    let request = EquityRequest::new(hands.to_vec(), variant)
        .with_board(board)
        .with_dead(dead);
    let mut config = EquityConfig::default()
        .with_monte_carlo(use_monte_carlo)
        .with_iterations(iterations);
    config.seed = seed;
    calculate_equity_with(&request, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands(list: &[&str]) -> Vec<Hand> {
        list.iter().map(|h| Hand::parse(h).unwrap()).collect()
    }

    fn mask(s: &str) -> CardMask {
        CardMask::parse(s).unwrap()
    }

    #[test]
    fn test_aces_vs_kings() {
        let result = calculate_equity(
            &hands(&["As Ad", "Ks Kd"]),
            CardMask::EMPTY,
            CardMask::EMPTY,
            GameVariant::Holdem,
            true,
            20_000,
            Some(42),
        )
        .unwrap();
        assert!(!result.exact);
        assert_eq!(result.samples, 20_000);
        let aces = &result.players[0];
        assert!((aces.equity - 82.0).abs() < 2.5, "aces equity {}", aces.equity);
        for p in &result.players {
            assert!((p.win + p.tie + p.lose - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_exact_flop_sums_to_hundred() {
        let result = calculate_equity(
            &hands(&["Ah Kh", "Qs Qd", "7c 8c"]),
            CardMask::EMPTY,
            mask("2h 9c Th"),
            GameVariant::Holdem,
            false,
            0,
            None,
        )
        .unwrap();
        assert!(result.exact);
        assert_eq!(result.samples, 903);
        for p in &result.players {
            assert!((p.win + p.tie + p.lose - 100.0).abs() < 1e-9);
        }
        let total: f64 = result.players.iter().map(|p| p.equity).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_seed_independent_of_threads() {
        let request =
            EquityRequest::parse(&["As Ad", "Ks Kd", "7c 8c"], "", "", GameVariant::Holdem)
                .unwrap();
        let config = EquityConfig::monte_carlo(5_000)
            .with_seed(1234)
            .with_chunk_size(512);

        let one = calculate_equity_with(&request, &config.clone().with_threads(1)).unwrap();
        let four = calculate_equity_with(&request, &config.clone().with_threads(4)).unwrap();
        let global = calculate_equity_with(&request, &config).unwrap();
        assert_eq!(one, four);
        assert_eq!(one, global);

        let other = calculate_equity_with(&request, &config.with_seed(4321)).unwrap();
        assert_ne!(one, other);
    }

    #[test]
    fn test_river_is_exact() {
        let request = EquityRequest::parse(
            &["As Ad", "Ks Kd"],
            "2c 7h 9d Jc Kc",
            "",
            GameVariant::Holdem,
        )
        .unwrap();
        let result = calculate_equity_with(&request, &EquityConfig::monte_carlo(1_000)).unwrap();
        assert!(result.exact);
        assert_eq!(result.samples, 1);
        assert_eq!(result.players[1].win, 100.0);
        assert_eq!(result.players[0].lose, 100.0);
    }

    #[test]
    fn test_omaha_hi_lo_reports_low() {
        let request = EquityRequest::parse(
            &["As 2s 3d 4d", "Kc Kh Qc Qh"],
            "5s 6h 7c",
            "",
            GameVariant::Omaha8,
        )
        .unwrap();
        let result = calculate_equity_with(&request, &EquityConfig::exact()).unwrap();
        let low_hand = &result.players[0];
        let lo = low_hand.lo.expect("hi-lo game reports low stats");
        // A-2 with three low board cards always has a low
        assert!((lo.win_lo - 100.0).abs() < 1e-9);
        assert!(lo.scoop > 0.0);
        assert!(low_hand.equity > 50.0);

        let high_hand = &result.players[1];
        let hi_lo = high_hand.lo.expect("hi-lo game reports low stats");
        assert_eq!(hi_lo.win_lo, 0.0);
        assert!((hi_lo.lose_lo - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_errors() {
        let err = calculate_equity(
            &hands(&["As Ad", "As Kd"]),
            CardMask::EMPTY,
            CardMask::EMPTY,
            GameVariant::Holdem,
            false,
            0,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, PokerError::DuplicateCard(_)));

        let err = calculate_equity(
            &hands(&["As Ad", "Ks Kd"]),
            mask("2c"),
            mask("2c 3c 4c"),
            GameVariant::Holdem,
            false,
            0,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, PokerError::DuplicateCard(_)));

        let err = calculate_equity(
            &hands(&["As Ad", "Ks Kd"]),
            CardMask::EMPTY,
            CardMask::EMPTY,
            GameVariant::Holdem,
            true,
            0,
            Some(1),
        )
        .unwrap_err();
        assert!(matches!(err, PokerError::Config(_)));
    }
}
