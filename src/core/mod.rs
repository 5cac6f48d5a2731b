//! Core game types: hands, players, strategies, attacks, RNG, configuration,
//! and state.
//!
//! Nothing here decides a move. Strategy resolution lives in `rules`.

pub mod hand;
pub mod player;
pub mod strategy;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use hand::{Finger, Hand, Handed, RaiseError, FINGER_COUNT};
pub use player::{Player, PlayerId, PlayerMap};
pub use strategy::Strategy;
pub use rng::{derive_seed, GameRng, GameRngState};
pub use config::{GameConfig, MAX_PLAYERS};
pub use action::{Attack, AttackRecord};
pub use state::{GameState, GameStatus};
