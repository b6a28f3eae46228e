//! Integer counters accumulated by equity workers.
//!
//! Each worker owns an [`EquityCounters`] and records showdowns into it.
//! Workers are combined once at the end with [`EquityCounters::merge`],
//! which is plain addition, so totals do not depend on how the work was
//! partitioned.

use crate::cards::CardMask;
use crate::error::{PokerError, Result};
use crate::eval::{GameVariant, HandCategory, HandStrength, LowResult};

/// Maximum number of players in one equity query.
pub const MAX_PLAYERS: usize = 12;

/// Units in one pot. Divisible by every split of either half among up to
/// [`MAX_PLAYERS`] players, so pot shares stay exact integers.
pub const POT_UNITS: u64 = 55_440;

/// Showdown tallies for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerCounters {
    /// Sole best high hand.
    pub win: u64,
    /// Best high hand shared with at least one other player.
    pub tie: u64,
    /// Beaten on the high side.
    pub lose: u64,
    /// Sole best high and sole best qualifying low.
    pub scoop: u64,
    /// Best qualifying low, alone or shared.
    pub win_lo: u64,
    /// Best qualifying low shared with at least one other player.
    pub tie_lo: u64,
    /// Someone made a low and this player did not have the best one.
    pub lose_lo: u64,
    /// Pot units won, in [`POT_UNITS`] per showdown.
    pub pot_share: u64,
}

impl PlayerCounters {
    fn add(&mut self, other: &PlayerCounters) {
        self.win += other.win;
        self.tie += other.tie;
        self.lose += other.lose;
        self.scoop += other.scoop;
        self.win_lo += other.win_lo;
        self.tie_lo += other.tie_lo;
        self.lose_lo += other.lose_lo;
        self.pot_share += other.pot_share;
    }
}

/// Counters for every player plus the number of showdowns recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityCounters {
    players: Vec<PlayerCounters>,
    samples: u64,
}

impl EquityCounters {
    /// Empty counters for `num_players` players.
    pub fn new(num_players: usize) -> Self {
        Self {
            players: vec![PlayerCounters::default(); num_players],
            samples: 0,
        }
    }

    /// Per-player tallies.
    pub fn players(&self) -> &[PlayerCounters] {
        &self.players
    }

    /// Number of showdowns recorded.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Combine two sets of counters for the same players.
    pub fn merge(mut self, other: EquityCounters) -> Self {
        debug_assert_eq!(self.players.len(), other.players.len());
        for (mine, theirs) in self.players.iter_mut().zip(other.players.iter()) {
            mine.add(theirs);
        }
        self.samples += other.samples;
        self
    }

    /// Score every player on a complete five card board and record the
    /// outcome.
    ///
    /// `holes` must hold exactly as many entries as these counters have
    /// players. More than [`MAX_PLAYERS`] holes is an error.
    pub fn record(
        &mut self,
        variant: GameVariant,
        holes: &[CardMask],
        board: CardMask,
    ) -> Result<()> {
        debug_assert_eq!(holes.len(), self.players.len());
        let n = holes.len();
        if n > MAX_PLAYERS {
            return Err(PokerError::InvalidPlayerCount {
                found: n,
                max: MAX_PLAYERS,
            });
        }

        let mut high = [HandStrength::new(HandCategory::HighCard, &[]); MAX_PLAYERS];
        for (slot, &hole) in high.iter_mut().zip(holes) {
            *slot = variant.evaluate_high(hole, board)?;
        }
        let high = &high[..n];
        let Some(best_high) = high.iter().copied().max() else {
            return Ok(());
        };
        let high_winners = high.iter().filter(|&&h| h == best_high).count();

        let mut low = [LowResult::NoQualifyingLow; MAX_PLAYERS];
        let mut low_winners = 0;
        let mut best_low = LowResult::NoQualifyingLow;
        if variant.is_hi_lo() {
            for (slot, &hole) in low.iter_mut().zip(holes) {
                *slot = variant.evaluate_low(hole, board)?;
            }
            best_low = low[..n].iter().copied().max().unwrap_or(best_low);
            if best_low.is_qualified() {
                low_winners = low[..n].iter().filter(|&&l| l == best_low).count();
            }
        }

        // Whole pot to the high side unless a low qualified
        let (high_pot, low_pot) = if low_winners > 0 {
            (POT_UNITS / 2, POT_UNITS / 2)
        } else {
            (POT_UNITS, 0)
        };

        for (i, counters) in self.players.iter_mut().enumerate() {
            let won_high = high[i] == best_high;
            if won_high {
                counters.pot_share += high_pot / high_winners as u64;
                if high_winners == 1 {
                    counters.win += 1;
                } else {
                    counters.tie += 1;
                }
            } else {
                counters.lose += 1;
            }

            if low_winners == 0 {
                continue;
            }
            if low[i] == best_low {
                counters.pot_share += low_pot / low_winners as u64;
                counters.win_lo += 1;
                if low_winners > 1 {
                    counters.tie_lo += 1;
                } else if won_high && high_winners == 1 {
                    counters.scoop += 1;
                }
            } else {
                counters.lose_lo += 1;
            }
        }

        self.samples += 1;
        Ok(())
    }
}
