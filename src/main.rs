//! Command line front end.
//!
//! `chopsticks play` runs one game and prints its status turn by turn;
//! `chopsticks batch` runs every two-player pairing many times and prints
//! the win tallies.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chopsticks::{BatchConfig, BatchRunner, ChopsticksGame, GameConfig, LogObserver, StatusPrinter};

#[derive(Parser)]
#[command(name = "chopsticks", about = "Simulate chopsticks games between fixed strategies")]
struct Cli {
    /// Log more (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a single game
    Play {
        /// Comma separated strategies, one per player
        #[arg(long, default_value = "fast,slow")]
        strategies: String,

        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Only print the result, not every turn
        #[arg(long)]
        quiet: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run every two-player pairing many times and tally wins
    Batch {
        /// JSON file with a batch configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Games per pairing
        #[arg(long)]
        games: Option<u32>,

        /// Root random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Run games one at a time
        #[arg(long)]
        sequential: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Play {
            strategies,
            seed,
            quiet,
            json,
        } => play(&strategies, seed, quiet || json, json),
        Command::Batch {
            config,
            games,
            seed,
            sequential,
            json,
        } => {
            let mut batch = match config {
                Some(path) => load_batch_config(&path)?,
                None => BatchConfig::default(),
            };
            if let Some(games) = games {
                batch = batch.with_games(games);
            }
            if let Some(seed) = seed {
                batch = batch.with_seed(seed);
            }
            if sequential {
                batch = batch.with_parallel(false);
            }
            run_batch(batch, json)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn play(strategies: &str, seed: u64, quiet: bool, json: bool) -> Result<()> {
    let config = GameConfig::from_lineup(strategies)
        .with_context(|| format!("invalid lineup {strategies:?}"))?
        .with_seed(seed);
    let mut game = ChopsticksGame::new(&config)?;

    // Quiet runs still log each table at debug level (-vv).
    let outcome = if quiet {
        game.play_observed(&mut LogObserver)?
    } else {
        let mut printer = StatusPrinter::new(io::stdout().lock());
        game.play_observed(&mut printer)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{outcome}");
    }
    Ok(())
}

fn load_batch_config(path: &Path) -> Result<BatchConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading batch config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing batch config {}", path.display()))
}

fn run_batch(config: BatchConfig, json: bool) -> Result<()> {
    let runner = BatchRunner::new(config)?;
    let report = runner.run_two_player().context("batch run failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
        println!("Calculation Time: {:.3} seconds", report.elapsed.as_secs_f64());
    }
    Ok(())
}
