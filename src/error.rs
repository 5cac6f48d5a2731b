//! Error taxonomy for game construction and turn resolution.
//!
//! Two families:
//! - **Configuration** errors are reported when a game or batch is built.
//! - **Invariant violations** mean the strategy or engine logic reached a
//!   state the rules say cannot happen. They are always fatal for the game.

use thiserror::Error;

use crate::core::hand::Handed;
use crate::core::player::PlayerId;
use crate::core::strategy::Strategy;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChopsticksError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChopsticksError {
    // === Configuration ===
    #[error("a game needs at least 2 players, got {count}")]
    TooFewPlayers { count: usize },
    #[error("at most 255 players supported, got {count}")]
    TooManyPlayers { count: usize },
    #[error("unknown strategy: {0:?}")]
    UnknownStrategy(String),
    #[error("invalid batch: {0}")]
    InvalidBatch(String),

    // === Invariant violations ===
    #[error("{player} ({strategy}) found no attack candidate")]
    NoCandidate { player: PlayerId, strategy: Strategy },
    #[error("{player} has no hand still in")]
    NoHandIn { player: PlayerId },
    #[error("{player} attacked with {hand} hand but it has no raised fingers")]
    EmptyAttackingHand { player: PlayerId, hand: Handed },
    #[error("{player} attacked with {hand} hand but it is out")]
    AttackingHandOut { player: PlayerId, hand: Handed },
    #[error("{player}'s {hand} hand is already out")]
    TargetHandOut { player: PlayerId, hand: Handed },
    #[error("{attacker} cannot target {target}")]
    IllegalTarget { attacker: PlayerId, target: PlayerId },
    #[error("game is already won by {winner}")]
    GameAlreadyWon { winner: PlayerId },
}

impl ChopsticksError {
    /// True for the should-never-happen family.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(
            self,
            ChopsticksError::TooFewPlayers { .. }
                | ChopsticksError::TooManyPlayers { .. }
                | ChopsticksError::UnknownStrategy(_)
                | ChopsticksError::InvalidBatch(_)
        )
    }
}
