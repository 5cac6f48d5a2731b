//! Game configuration.
//!
//! A game is fully described by its lineup of strategies (one per seat, in
//! turn order) and the seed of its random stream.

use serde::{Deserialize, Serialize};

use super::strategy::Strategy;
use crate::error::{ChopsticksError, Result};

/// Largest table `PlayerId` can address.
pub const MAX_PLAYERS: usize = 255;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// One strategy per player, in turn order.
    pub strategies: Vec<Strategy>,

    /// Seed for the game's RNG. Only `Random` players consume it.
    pub seed: u64,
}

impl GameConfig {
    /// Create a config for the given lineup with seed 0.
    pub fn new(strategies: impl Into<Vec<Strategy>>) -> Self {
        Self {
            strategies: strategies.into(),
            seed: 0,
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a comma separated lineup, e.g. `"random,fast"`.
    pub fn from_lineup(lineup: &str) -> Result<Self> {
        let config = Self::new(Strategy::parse_list(lineup)?);
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.strategies.len()
    }

    /// Check the lineup can be played.
    pub fn validate(&self) -> Result<()> {
        let count = self.player_count();
        if count < 2 {
            return Err(ChopsticksError::TooFewPlayers { count });
        }
        if count > MAX_PLAYERS {
            return Err(ChopsticksError::TooManyPlayers { count });
        }
        Ok(())
    }
}
