//! # chopsticks
//!
//! A simulator for the hand game chopsticks, used to compare fixed play
//! strategies over many games.
//!
//! ## Rules
//!
//! Every player starts with one finger raised on each hand. On a turn a
//! player adds the raised fingers of one of its hands to one hand of an
//! opponent. A hand with all five fingers raised is out; a player with both
//! hands out is a loser and is skipped from then on. The last player left
//! wins.
//!
//! ## Design Principles
//!
//! 1. **Monotonic state**: fingers are only raised, hands only go out,
//!    players only become losers. Games always terminate.
//!
//! 2. **Explicit randomness**: each game owns a seeded `GameRng`. Batches
//!    derive one seed per game, so parallel and sequential runs agree.
//!
//! 3. **Loud invariants**: impossible states surface as `ChopsticksError`
//!    values, never as silently corrupted games.
//!
//! ## Modules
//!
//! - `core`: Hands, players, strategies, attacks, RNG, configuration, state
//! - `rules`: Target searches, per-strategy decisions, the game loop
//! - `report`: Turn snapshots and observers
//! - `analysis`: Batch runs over strategy lineups
//!
//! ```
//! use chopsticks::{run_game, GameConfig, Strategy};
//!
//! let outcome = run_game(&GameConfig::new([Strategy::Fast, Strategy::Slow])).unwrap();
//! assert_eq!(outcome.player_count, 2);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod report;
pub mod analysis;

// Re-export commonly used types
pub use crate::core::{
    Attack, AttackRecord, GameConfig, GameRng, GameRngState, GameState, GameStatus, Hand, Handed,
    Player, PlayerId, PlayerMap, Strategy, FINGER_COUNT,
};

pub use crate::error::{ChopsticksError, Result};

pub use crate::rules::{decide, replay, run_game, ChopsticksGame, GameOutcome};

pub use crate::report::{
    LogObserver, NoopObserver, RecordingObserver, StatusPrinter, TurnObserver, TurnSnapshot,
};

pub use crate::analysis::{two_player_pairings, BatchConfig, BatchReport, BatchRunner, LineupTally};
