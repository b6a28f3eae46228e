//! Exhaustive enumeration of board completions.

use super::counters::EquityCounters;
use super::request::BOARD_CARDS;
use crate::cards::{Card, CardMask};
use crate::error::Result;
use crate::eval::combos::{n_choose_k, Combinations};
use crate::eval::GameVariant;
use rayon::prelude::*;

/// Number of boards [`enumerate_boards`] will visit.
pub fn board_count(board: CardMask, known: CardMask) -> u64 {
    let missing = BOARD_CARDS.saturating_sub(board.count());
    n_choose_k(known.complement().count(), missing)
}

/// Record a showdown for every way of completing `board` from the cards
/// not in `known`.
///
/// Work is split by the first card drawn: the task for live card `i`
/// visits every completion whose lowest drawn card is `i`, so each board
/// is seen exactly once.
pub fn enumerate_boards(
    variant: GameVariant,
    holes: &[CardMask],
    board: CardMask,
    known: CardMask,
) -> Result<EquityCounters> {
    let missing = BOARD_CARDS.saturating_sub(board.count());
    let players = holes.len();
    if missing == 0 {
        let mut counters = EquityCounters::new(players);
        counters.record(variant, holes, board)?;
        return Ok(counters);
    }

    let live = known.complement().to_vec();
    (0..live.len())
        .into_par_iter()
        .map(|first| {
            let mut counters = EquityCounters::new(players);
            let rest = &live[first + 1..];
            let head = board | CardMask::from_card(live[first]);
            for combo in Combinations::new(rest.len(), missing - 1) {
                counters.record(variant, holes, complete(head, rest, combo.as_slice()))?;
            }
            Ok(counters)
        })
        .try_reduce(|| EquityCounters::new(players), |a, b| Ok(a.merge(b)))
}

#[inline]
fn complete(head: CardMask, rest: &[Card], picks: &[u8]) -> CardMask {
    picks
        .iter()
        .fold(head, |acc, &i| acc | CardMask::from_card(rest[i as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(s: &str) -> CardMask {
        CardMask::parse(s).unwrap()
    }

    #[test]
    fn test_turn_visits_every_river() {
        let holes = [mask("As Ad"), mask("Ks Kd")];
        let board = mask("2c 7h 9d Jc");
        let known = holes[0] | holes[1] | board;
        assert_eq!(board_count(board, known), 44);

        let counters = enumerate_boards(GameVariant::Holdem, &holes, board, known).unwrap();
        assert_eq!(counters.samples(), 44);
        // Kings need one of the two remaining kings
        assert_eq!(counters.players()[1].win, 2);
        assert_eq!(counters.players()[0].win, 42);
    }

    #[test]
    fn test_flop_counts() {
        let holes = [mask("As Ad"), mask("Ks Kd")];
        let board = mask("2c 7h 9d");
        let known = holes[0] | holes[1] | board;
        let counters = enumerate_boards(GameVariant::Holdem, &holes, board, known).unwrap();
        assert_eq!(counters.samples(), n_choose_k(45, 2));
        for p in counters.players() {
            assert_eq!(p.win + p.tie + p.lose, counters.samples());
        }
    }

    #[test]
    fn test_complete_board() {
        let holes = [mask("As Ad"), mask("Ks Kd")];
        let board = mask("2c 7h 9d Jc Kc");
        let known = holes[0] | holes[1] | board;
        let counters = enumerate_boards(GameVariant::Holdem, &holes, board, known).unwrap();
        assert_eq!(counters.samples(), 1);
        assert_eq!(counters.players()[1].win, 1);
    }
}
