//! Command line front end for the poker equity engine.
//!
//! Every subcommand prints JSON on stdout. Log output goes to stderr and
//! is controlled with `RUST_LOG`.
//!
//! Usage:
//!   poker_equity eval "As Ks Qs Js Ts"
//!   poker_equity equity --hand "As Ad" --hand "Ks Kd" --monte-carlo --seed 7
//!   poker_equity range-equity "QQ+, AKs" "JJ-99" --board "2c 7h 9d"
//!   poker_equity outs --hole "As 2s" --board "Ks Qs 2d"

use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;
use log::error;
use poker_equity::range::combo_class;
use poker_equity::{
    calculate_equity_with, calculate_outs, calculate_range_equity, evaluate_high,
    evaluate_low, BoardTexture, CardMask, EquityConfig, EquityRequest, GameVariant,
    HandRange,
};
use serde_json::json;
use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Parser)]
#[clap(version, about = "Poker hand evaluation and equity calculator")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Best high hand of 5-7 cards.
    Eval {
        /// Cards, e.g. "As Ks Qs Js Ts".
        cards: String,
    },
    /// Best eight-or-better low of 5-7 cards.
    Low {
        /// Cards, e.g. "Ah 2d 3c 4s 8h Kd".
        cards: String,
    },
    /// Equity of two or more hands.
    Equity {
        /// Hole cards of one player; repeat for each player.
        #[clap(long = "hand", short = 'H', required = true)]
        hands: Vec<String>,
        /// Board cards already dealt.
        #[clap(long, short, default_value = "")]
        board: String,
        /// Cards out of play.
        #[clap(long, short, default_value = "")]
        dead: String,
        /// Game variant.
        #[clap(long, short, default_value = "holdem")]
        variant: GameVariant,
        #[clap(flatten)]
        engine: EngineArgs,
    },
    /// Equity of one hold'em range against another.
    RangeEquity {
        /// First range, e.g. "QQ+, AKs".
        hero: String,
        /// Second range.
        villain: String,
        /// Board cards already dealt.
        #[clap(long, short, default_value = "")]
        board: String,
        /// Cards out of play.
        #[clap(long, short, default_value = "")]
        dead: String,
        #[clap(flatten)]
        engine: EngineArgs,
    },
    /// Cards that improve a hand, by category.
    Outs {
        /// Hole cards.
        #[clap(long)]
        hole: String,
        /// Board of 3 or 4 cards.
        #[clap(long, short)]
        board: String,
    },
    /// Structural flags of a board.
    Texture {
        /// Board cards.
        board: String,
    },
    /// Expand range notation into concrete combos.
    Expand {
        /// Range notation, e.g. "TT+, AJs+".
        notation: String,
        /// Cards whose combos are removed.
        #[clap(long, default_value = "")]
        blocked: String,
    },
}

/// Engine settings shared by the equity commands.
#[derive(Debug, Args)]
struct EngineArgs {
    /// Load settings from a JSON file; flags below override it.
    #[clap(long)]
    config: Option<PathBuf>,
    /// Sample random boards instead of enumerating.
    #[clap(long, short)]
    monte_carlo: bool,
    /// Number of Monte Carlo trials.
    #[clap(long, short)]
    iterations: Option<u64>,
    /// Random seed for reproducible sampling.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Worker threads (default: all cores).
    #[clap(long, short)]
    threads: Option<usize>,
    /// Trials per seeded chunk.
    #[clap(long)]
    chunk_size: Option<u64>,
}

impl EngineArgs {
    fn to_config(&self) -> Result<EquityConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => EquityConfig::default(),
        };
        if self.monte_carlo {
            config.use_monte_carlo = true;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.threads.is_some() {
            config.num_threads = self.threads;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Run `op` behind a spinner on stderr.
fn with_spinner<T>(message: &str, op: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let start = Instant::now();
    let out = op();
    spinner.finish_and_clear();
    log::info!("{} finished in {:.2}s", message, start.elapsed().as_secs_f64());
    out
}

fn run(command: Command) -> Result<serde_json::Value, Box<dyn Error>> {
    let value = match command {
        Command::Eval { cards } => {
            let strength = evaluate_high(CardMask::parse(&cards)?)?;
            json!({
                "cards": cards,
                "category": strength.category(),
                "label": strength.label(),
                "value": strength.value(),
            })
        }
        Command::Low { cards } => {
            let low = evaluate_low(CardMask::parse(&cards)?)?;
            json!({
                "cards": cards,
                "qualified": low.is_qualified(),
                "low": low.to_string(),
            })
        }
        Command::Equity {
            hands,
            board,
            dead,
            variant,
            engine,
        } => {
            let config = engine.to_config()?;
            let request = EquityRequest::parse(&hands, &board, &dead, variant)?;
            let result = with_spinner("equity", || calculate_equity_with(&request, &config))?;
            serde_json::to_value(result)?
        }
        Command::RangeEquity {
            hero,
            villain,
            board,
            dead,
            engine,
        } => {
            let config = engine.to_config()?;
            let hero = HandRange::parse(&hero)?;
            let villain = HandRange::parse(&villain)?;
            let board = CardMask::parse(&board)?;
            let dead = CardMask::parse(&dead)?;
            let result = with_spinner("range equity", || {
                calculate_range_equity(&hero, &villain, board, dead, &config)
            })?;
            serde_json::to_value(result)?
        }
        Command::Outs { hole, board } => {
            let outs = calculate_outs(CardMask::parse(&hole)?, CardMask::parse(&board)?)?;
            serde_json::to_value(outs)?
        }
        Command::Texture { board } => {
            serde_json::to_value(BoardTexture::analyze(CardMask::parse(&board)?))?
        }
        Command::Expand { notation, blocked } => {
            let range = HandRange::expand(&notation, CardMask::parse(&blocked)?)?;
            let combos: Vec<String> = range.combos().iter().map(|h| h.to_string()).collect();
            let mut classes: Vec<String> = range.combos().iter().filter_map(combo_class).collect();
            classes.dedup();
            json!({
                "notation": range.notation(),
                "count": combos.len(),
                "classes": classes,
                "combos": combos,
            })
        }
    };
    Ok(value)
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
