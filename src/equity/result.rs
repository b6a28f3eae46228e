//! Percentages reported by equity queries.

use super::counters::{EquityCounters, PlayerCounters, POT_UNITS};
use crate::cards::Hand;
use serde::Serialize;
use std::fmt;

/// Low-half statistics for hi-lo games, in percent of showdowns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LowStats {
    /// Won both halves outright.
    pub scoop: f64,
    /// Won or tied the low half.
    pub win_lo: f64,
    /// Tied the low half.
    pub tie_lo: f64,
    /// A low was made and this player did not have the best one.
    pub lose_lo: f64,
}

/// Results for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerEquity {
    /// The player's hole cards.
    pub hand: Hand,
    /// Sole best high hand, percent.
    pub win: f64,
    /// Shared best high hand, percent.
    pub tie: f64,
    /// Lost the high half, percent.
    pub lose: f64,
    /// Average share of the pot, percent.
    pub equity: f64,
    /// Low-half statistics; `None` for high-only games.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lo: Option<LowStats>,
}

/// Result of [`super::calculate_equity`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityResult {
    /// One entry per input hand, in input order.
    pub players: Vec<PlayerEquity>,
    /// Number of board completions evaluated.
    pub samples: u64,
    /// Whether every completion was enumerated.
    pub exact: bool,
}

fn percent(count: u64, samples: u64) -> f64 {
    if samples == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / samples as f64
}

impl PlayerEquity {
    fn from_counters(hand: Hand, c: &PlayerCounters, samples: u64, hi_lo: bool) -> Self {
        let win = percent(c.win, samples);
        let tie = percent(c.tie, samples);
        // Every showdown is exactly one of win, tie or lose
        let lose = if samples == 0 { 0.0 } else { 100.0 - win - tie };
        let equity = if samples == 0 {
            0.0
        } else {
            c.pot_share as f64 * 100.0 / (samples as f64 * POT_UNITS as f64)
        };

        let lo = hi_lo.then(|| LowStats {
            scoop: percent(c.scoop, samples),
            win_lo: percent(c.win_lo, samples),
            tie_lo: percent(c.tie_lo, samples),
            lose_lo: percent(c.lose_lo, samples),
        });

        Self {
            hand,
            win,
            tie,
            lose,
            equity,
            lo,
        }
    }
}

impl EquityResult {
    pub(crate) fn from_counters(
        hands: &[Hand],
        counters: &EquityCounters,
        exact: bool,
        hi_lo: bool,
    ) -> Self {
        let samples = counters.samples();
        let players = hands
            .iter()
            .zip(counters.players())
            .map(|(hand, c)| PlayerEquity::from_counters(hand.clone(), c, samples, hi_lo))
            .collect();

        Self {
            players,
            samples,
            exact,
        }
    }

    /// Results for player `index`, if present.
    pub fn player(&self, index: usize) -> Option<&PlayerEquity> {
        self.players.get(index)
    }
}

impl fmt::Display for EquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.exact { "exact" } else { "monte carlo" };
        writeln!(f, "{} samples ({})", self.samples, mode)?;
        for p in &self.players {
            write!(
                f,
                "{:<20} equity {:6.2}%  win {:6.2}%  tie {:6.2}%  lose {:6.2}%",
                p.hand.to_string(),
                p.equity,
                p.win,
                p.tie,
                p.lose
            )?;
            if let Some(lo) = &p.lo {
                write!(f, "  scoop {:6.2}%  win lo {:6.2}%", lo.scoop, lo.win_lo)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Result of [`super::calculate_range_equity`], from the first range's
/// point of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeEquityResult {
    /// Showdowns won outright.
    pub wins: u64,
    /// Showdowns split.
    pub ties: u64,
    /// Showdowns lost.
    pub losses: u64,
    /// Showdowns evaluated.
    pub samples: u64,
    /// Average pot share in percent, ties counted as half.
    pub equity: f64,
}

impl RangeEquityResult {
    pub(crate) fn from_counters(counters: &EquityCounters) -> Self {
        let samples = counters.samples();
        let hero = counters.players().first().copied().unwrap_or_default();
        let equity = if samples == 0 {
            0.0
        } else {
            hero.pot_share as f64 * 100.0 / (samples as f64 * POT_UNITS as f64)
        };

        Self {
            wins: hero.win,
            ties: hero.tie,
            losses: hero.lose,
            samples,
            equity,
        }
    }
}

impl fmt::Display for RangeEquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "equity {:.2}% ({} wins, {} ties, {} losses over {} samples)",
            self.equity, self.wins, self.ties, self.losses, self.samples
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardMask;
    use crate::eval::GameVariant;

    #[test]
    fn test_percentages_sum_to_hundred() {
        let hands = vec![Hand::parse("As Ad").unwrap(), Hand::parse("Ks Kd").unwrap()];
        let holes: Vec<CardMask> = hands.iter().map(Hand::mask).collect();
        let mut counters = EquityCounters::new(2);
        for board in ["2c 7h 9d Jc 3s", "Kc 7h 9d Jc 3s", "Tc Jh Qd Kc Ah"] {
            counters
                .record(GameVariant::Holdem, &holes, CardMask::parse(board).unwrap())
                .unwrap();
        }

        let result = EquityResult::from_counters(&hands, &counters, true, false);
        assert_eq!(result.samples, 3);
        for p in &result.players {
            assert!((p.win + p.tie + p.lose - 100.0).abs() < 1e-9);
            assert!(p.lo.is_none());
        }
        let total: f64 = result.players.iter().map(|p| p.equity).sum();
        assert!((total - 100.0).abs() < 1e-9);
        // One win and one chop out of three
        assert!((result.players[0].equity - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_shape() {
        let hands = vec![Hand::parse("As Ad").unwrap(), Hand::parse("Ks Kd").unwrap()];
        let result = EquityResult::from_counters(&hands, &EquityCounters::new(2), true, false);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["players"][0]["hand"], "As Ad");
        assert!(json["players"][0].get("lo").is_none());
        assert_eq!(json["exact"], true);
    }
}
