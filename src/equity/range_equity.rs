//! Range against range equity for hold'em.
//!
//! Every concrete combo in a range carries the same weight. Exact mode
//! enumerates every pair of non-conflicting combos and every board
//! completion for each pair. Monte Carlo mode draws one combo from each
//! range uniformly, redrawing on conflict, and then a board completion.

use super::counters::EquityCounters;
use super::exact::{board_count, enumerate_boards};
use super::monte_carlo::{base_seed, chunk_rng, chunks};
use super::request::BOARD_CARDS;
use super::result::RangeEquityResult;
use super::run_with_threads;
use crate::cards::{Card, CardMask};
use crate::config::EquityConfig;
use crate::error::{PokerError, Result};
use crate::eval::GameVariant;
use crate::range::HandRange;
use rand::Rng;
use rayon::prelude::*;

/// Equity of `hero` against `villain` on a partial board.
///
/// Combos touching the board or dead cards are removed first; a range
/// left with no combos fails with [`PokerError::EmptyRange`], as does a
/// pair of ranges where every combo conflicts with every other.
pub fn calculate_range_equity(
    hero: &HandRange,
    villain: &HandRange,
    board: CardMask,
    dead: CardMask,
    config: &EquityConfig,
) -> Result<RangeEquityResult> {
    config.validate()?;
    if board.count() > BOARD_CARDS {
        return Err(PokerError::insufficient("0-5 board", board.count()));
    }
    if let Some(card) = board.intersect(dead).iter().next() {
        return Err(PokerError::DuplicateCard(card));
    }

    let blocked = board | dead;
    let hero_combos = hero.without_blocked(blocked).masks();
    let villain_combos = villain.without_blocked(blocked).masks();
    if hero_combos.is_empty() {
        return Err(PokerError::EmptyRange(hero.notation().to_string()));
    }
    if villain_combos.is_empty() {
        return Err(PokerError::EmptyRange(villain.notation().to_string()));
    }

    let conflict_free = hero_combos
        .iter()
        .any(|h| villain_combos.iter().any(|v| !h.overlaps(*v)));
    if !conflict_free {
        return Err(PokerError::EmptyRange(villain.notation().to_string()));
    }

    // Every matchup holds four cards outside the blocked set
    let missing = BOARD_CARDS - board.count();
    let live = blocked.complement().count().saturating_sub(4);
    if live < missing {
        return Err(PokerError::insufficient(
            format!("{} live", missing),
            live,
        ));
    }

    log::debug!(
        "range equity {} vs {}: {} x {} combos",
        hero,
        villain,
        hero_combos.len(),
        villain_combos.len()
    );

    let counters = run_with_threads(config.num_threads, || {
        if config.use_monte_carlo {
            sample_matchups(&hero_combos, &villain_combos, blocked, board, config)
        } else {
            enumerate_matchups(&hero_combos, &villain_combos, blocked, board)
        }
    })?;

    let result = RangeEquityResult::from_counters(&counters);
    log::info!(
        "{} vs {}: {:.2}% over {} samples",
        hero,
        villain,
        result.equity,
        result.samples
    );
    Ok(result)
}

fn enumerate_matchups(
    hero: &[CardMask],
    villain: &[CardMask],
    blocked: CardMask,
    board: CardMask,
) -> Result<EquityCounters> {
    let pairs: Vec<(CardMask, CardMask)> = hero
        .iter()
        .flat_map(|&h| {
            villain
                .iter()
                .filter(move |&&v| !h.overlaps(v))
                .map(move |&v| (h, v))
        })
        .collect();
    let boards: u64 = pairs
        .iter()
        .map(|&(h, v)| board_count(board, blocked | h | v))
        .sum();
    log::debug!("enumerating {} matchups, {} showdowns", pairs.len(), boards);

    pairs
        .par_iter()
        .map(|&(h, v)| {
            let holes = [h, v];
            enumerate_boards(GameVariant::Holdem, &holes, board, blocked | h | v)
        })
        .try_reduce(|| EquityCounters::new(2), |a, b| Ok(a.merge(b)))
}

fn sample_matchups(
    hero: &[CardMask],
    villain: &[CardMask],
    blocked: CardMask,
    board: CardMask,
    config: &EquityConfig,
) -> Result<EquityCounters> {
    let missing = BOARD_CARDS.saturating_sub(board.count());
    let live = blocked.complement().to_vec();
    let base = base_seed(config.seed);

    chunks(config.iterations, config.chunk_size)
        .into_par_iter()
        .map(|(chunk, trials)| {
            let mut rng = chunk_rng(base, chunk);
            let mut counters = EquityCounters::new(2);
            for _ in 0..trials {
                let (h, v) = loop {
                    let h = hero[rng.gen_range(0..hero.len())];
                    let v = villain[rng.gen_range(0..villain.len())];
                    if !h.overlaps(v) {
                        break (h, v);
                    }
                };
                let drawn = draw_excluding(&mut rng, &live, h | v, missing);
                counters.record(GameVariant::Holdem, &[h, v], board | drawn)?;
            }
            Ok(counters)
        })
        .try_reduce(|| EquityCounters::new(2), |a, b| Ok(a.merge(b)))
}

/// Draw `n` distinct cards from `live` that are not in `used`.
fn draw_excluding<R: Rng>(rng: &mut R, live: &[Card], used: CardMask, n: usize) -> CardMask {
    let mut drawn = CardMask::EMPTY;
    while drawn.count() < n {
        let card = live[rng.gen_range(0..live.len())];
        if !used.contains(card) {
            drawn |= CardMask::from_card(card);
        }
    }
    drawn
}
