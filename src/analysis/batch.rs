//! Batch runs: many games per lineup, tallied by seat and by strategy.
//!
//! Every game gets its own seed derived from the batch seed, the lineup's
//! position in the batch, and the game's position in the lineup. Results are
//! therefore identical whether games run in parallel or one after another.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{derive_seed, GameConfig, PlayerMap, Strategy};
use crate::error::{ChopsticksError, Result};
use crate::rules::{run_game, GameOutcome};

use super::pairings::two_player_pairings;

/// Configuration for a batch run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Games played for each lineup.
    pub games_per_pairing: u32,

    /// Root seed for every game in the batch.
    pub seed: u64,

    /// Run the games of a lineup on the rayon pool.
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            games_per_pairing: 100,
            seed: 42,
            parallel: true,
        }
    }
}

impl BatchConfig {
    /// Create a new batch config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set games per lineup.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games_per_pairing = games;
        self
    }

    /// Set the root seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable parallel games.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.games_per_pairing == 0 {
            return Err(ChopsticksError::InvalidBatch(
                "games per pairing must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Seed of game `game` in lineup `lineup`.
    #[must_use]
    pub fn game_seed(&self, lineup: usize, game: u32) -> u64 {
        derive_seed(derive_seed(self.seed, lineup as u64 + 1), u64::from(game) + 1)
    }
}

/// Wins for one lineup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupTally {
    /// 1-based position in the batch.
    pub number: usize,
    pub lineup: Vec<Strategy>,
    pub games: u32,
    /// Wins by seat.
    pub seat_wins: PlayerMap<u32>,
    /// Wins by strategy. Mirror matches credit one strategy with every win.
    pub strategy_wins: FxHashMap<Strategy, u32>,
    pub total_turns: u64,
}

impl LineupTally {
    fn new(number: usize, lineup: &[Strategy]) -> Self {
        Self {
            number,
            lineup: lineup.to_vec(),
            games: 0,
            seat_wins: PlayerMap::with_value(lineup.len(), 0),
            strategy_wins: FxHashMap::default(),
            total_turns: 0,
        }
    }

    fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        self.seat_wins[outcome.winner] += 1;
        *self.strategy_wins.entry(outcome.strategy).or_insert(0) += 1;
        self.total_turns += u64::from(outcome.turns);
    }

    #[must_use]
    pub fn wins_for(&self, strategy: Strategy) -> u32 {
        self.strategy_wins.get(&strategy).copied().unwrap_or(0)
    }

    /// Average game length in turns.
    #[must_use]
    pub fn avg_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.games)
        }
    }
}

impl std::fmt::Display for LineupTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pairing {}:", self.number)?;
        for ((_, wins), strategy) in self.seat_wins.iter().zip(&self.lineup) {
            writeln!(f, "{strategy} with {wins} wins")?;
        }
        Ok(())
    }
}

/// Results of a whole batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchReport {
    pub config: BatchConfig,
    pub pairings: Vec<LineupTally>,
    pub elapsed: Duration,
}

impl BatchReport {
    /// Wins per strategy summed over every lineup.
    #[must_use]
    pub fn strategy_totals(&self) -> FxHashMap<Strategy, u32> {
        let mut totals = FxHashMap::default();
        for tally in &self.pairings {
            for (&strategy, &wins) in &tally.strategy_wins {
                *totals.entry(strategy).or_insert(0) += wins;
            }
        }
        totals
    }

    #[must_use]
    pub fn total_games(&self) -> u64 {
        self.pairings.iter().map(|t| u64::from(t.games)).sum()
    }
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tally in &self.pairings {
            writeln!(f, "{tally}")?;
        }

        let totals = self.strategy_totals();
        writeln!(f, "Total wins over {} games:", self.total_games())?;
        for strategy in Strategy::ALL {
            writeln!(f, "{strategy}: {}", totals.get(&strategy).copied().unwrap_or(0))?;
        }
        Ok(())
    }
}

/// Runs lineups according to a [`BatchConfig`].
#[derive(Clone, Debug)]
pub struct BatchRunner {
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(config: BatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Every two-player lineup, in pairing order.
    pub fn run_two_player(&self) -> Result<BatchReport> {
        let lineups: Vec<Vec<Strategy>> = two_player_pairings().iter().map(|p| p.to_vec()).collect();
        self.run_lineups(&lineups)
    }

    /// The given lineups, in order.
    pub fn run_lineups(&self, lineups: &[Vec<Strategy>]) -> Result<BatchReport> {
        let started = Instant::now();
        log::debug!(
            "batch of {} lineups x {} games (seed {})",
            lineups.len(),
            self.config.games_per_pairing,
            self.config.seed
        );

        let pairings = lineups
            .iter()
            .enumerate()
            .map(|(index, lineup)| self.run_lineup(index, lineup))
            .collect::<Result<Vec<_>>>()?;

        Ok(BatchReport {
            config: self.config.clone(),
            pairings,
            elapsed: started.elapsed(),
        })
    }

    /// Every game of one lineup. `index` is the lineup's 0-based position.
    pub fn run_lineup(&self, index: usize, lineup: &[Strategy]) -> Result<LineupTally> {
        GameConfig::new(lineup).validate()?;

        let play = |game: u32| {
            let config = GameConfig::new(lineup).with_seed(self.config.game_seed(index, game));
            run_game(&config)
        };

        let games = 0..self.config.games_per_pairing;
        let outcomes: Vec<GameOutcome> = if self.config.parallel {
            games.into_par_iter().map(play).collect::<Result<_>>()?
        } else {
            games.map(play).collect::<Result<_>>()?
        };

        let mut tally = LineupTally::new(index + 1, lineup);
        for outcome in &outcomes {
            tally.record(outcome);
        }

        let names: Vec<&str> = lineup.iter().map(|s| s.name()).collect();
        log::info!(
            "pairing {} [{}]: seat wins {:?}, avg {:.1} turns",
            tally.number,
            names.join(" vs "),
            tally.seat_wins.values().collect::<Vec<_>>(),
            tally.avg_turns()
        );

        Ok(tally)
    }
}
