//! Seeded Monte Carlo sampling of board completions.
//!
//! Trials are grouped into fixed-size chunks. Chunk `i` draws from its own
//! `StdRng` seeded from the query seed and `i`, so the counters depend
//! only on the inputs, the seed, the trial count and the chunk size. The
//! number of worker threads and the order chunks finish in do not matter.

use super::counters::EquityCounters;
use super::request::BOARD_CARDS;
use crate::cards::{CardMask, Deck};
use crate::config::EquityConfig;
use crate::error::Result;
use crate::eval::GameVariant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// The seed used for a query: the configured one, or fresh entropy.
pub fn base_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => StdRng::from_entropy().gen(),
    }
}

/// Generator for chunk `chunk` of a query seeded with `base`.
pub fn chunk_rng(base: u64, chunk: u64) -> StdRng {
    StdRng::seed_from_u64(base ^ chunk.wrapping_add(1).wrapping_mul(SEED_STRIDE))
}

/// Split `iterations` trials into `(chunk index, trials)` pairs.
pub fn chunks(iterations: u64, chunk_size: u64) -> Vec<(u64, u64)> {
    let count = iterations.div_ceil(chunk_size);
    (0..count)
        .map(|i| (i, chunk_size.min(iterations - i * chunk_size)))
        .collect()
}

/// Record `config.iterations` showdowns on random completions of `board`.
pub fn sample_boards(
    variant: GameVariant,
    holes: &[CardMask],
    board: CardMask,
    known: CardMask,
    config: &EquityConfig,
) -> Result<EquityCounters> {
    let missing = BOARD_CARDS.saturating_sub(board.count());
    let players = holes.len();
    let base = base_seed(config.seed);
    let work = chunks(config.iterations, config.chunk_size);
    log::debug!(
        "sampling {} boards in {} chunks (seed {})",
        config.iterations,
        work.len(),
        base
    );

    work.into_par_iter()
        .map(|(chunk, trials)| {
            let mut rng = chunk_rng(base, chunk);
            let mut deck = Deck::without(known);
            let mut counters = EquityCounters::new(players);
            for _ in 0..trials {
                let drawn = deck.draw(&mut rng, missing);
                counters.record(variant, holes, board | drawn)?;
            }
            log::trace!("chunk {} finished {} trials", chunk, trials);
            Ok(counters)
        })
        .try_reduce(|| EquityCounters::new(players), |a, b| Ok(a.merge(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(s: &str) -> CardMask {
        CardMask::parse(s).unwrap()
    }

    #[test]
    fn test_chunks_cover_all_trials() {
        let work = chunks(10_000, 4_096);
        assert_eq!(work, vec![(0, 4_096), (1, 4_096), (2, 1_808)]);
        assert_eq!(chunks(4_096, 4_096).len(), 1);
        assert!(chunks(0, 16).is_empty());
    }

    #[test]
    fn test_chunk_generators_differ() {
        let a: u64 = chunk_rng(7, 0).gen();
        let b: u64 = chunk_rng(7, 1).gen();
        let again: u64 = chunk_rng(7, 0).gen();
        assert_ne!(a, b);
        assert_eq!(a, again);
    }

    #[test]
    fn test_seeded_sampling_is_repeatable() {
        let holes = [mask("As Ad"), mask("Ks Kd")];
        let board = mask("2c 7h 9d");
        let known = holes[0] | holes[1] | board;
        let config = EquityConfig::monte_carlo(3_000)
            .with_seed(11)
            .with_chunk_size(500);

        let first = sample_boards(GameVariant::Holdem, &holes, board, known, &config).unwrap();
        let second = sample_boards(GameVariant::Holdem, &holes, board, known, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.samples(), 3_000);
    }
}
