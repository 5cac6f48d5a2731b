//! Attacks: the only kind of move in chopsticks.
//!
//! An attack names the acting player and hand, and the opponent and hand it
//! lands on. `AttackRecord` adds the turn number for history and replay.

use serde::{Deserialize, Serialize};

use super::hand::Handed;
use super::player::PlayerId;

/// A single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attack {
    /// Player taking the turn.
    pub attacker: PlayerId,

    /// Hand the attacker adds from.
    pub attacking_hand: Handed,

    /// Opponent being attacked.
    pub target: PlayerId,

    /// Opponent hand receiving the fingers.
    pub target_hand: Handed,
}

impl Attack {
    #[must_use]
    pub fn new(attacker: PlayerId, attacking_hand: Handed, target: PlayerId, target_hand: Handed) -> Self {
        Self {
            attacker,
            attacking_hand,
            target,
            target_hand,
        }
    }
}

impl std::fmt::Display for Attack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.attacker, self.attacking_hand, self.target, self.target_hand
        )
    }
}

/// An attack as it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRecord {
    /// Turn number (starts at 1).
    pub turn: u32,

    pub attack: Attack,

    /// Target hand count after the attack.
    pub resulting_count: usize,

    /// Whether the attack knocked the target out of the game.
    pub eliminated: bool,
}
