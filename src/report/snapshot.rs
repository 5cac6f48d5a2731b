//! Point-in-time views of a game for observers and status output.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Hand, Handed, Player, PlayerId, Strategy};

/// One hand as seen in a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSnapshot {
    pub is_in: bool,
    pub count: usize,
}

impl From<&Hand> for HandSnapshot {
    fn from(hand: &Hand) -> Self {
        Self {
            is_in: hand.is_in(),
            count: hand.count(),
        }
    }
}

/// One player as seen in a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player: PlayerId,
    pub strategy: Strategy,
    pub right: HandSnapshot,
    pub left: HandSnapshot,
    pub is_loser: bool,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            player: player.id(),
            strategy: player.strategy(),
            right: player.hand(Handed::Right).into(),
            left: player.hand(Handed::Left).into(),
            is_loser: player.is_loser(),
        }
    }
}

/// The whole table after a turn. Turn 0 is the starting position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub turn: u32,
    pub players: Vec<PlayerSnapshot>,
}

impl TurnSnapshot {
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            turn: state.turns_taken(),
            players: state.players().iter().map(PlayerSnapshot::from).collect(),
        }
    }
}

impl std::fmt::Display for TurnSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "---TURN {}---", self.turn)?;
        for player in &self.players {
            writeln!(f, "<{}>", player.player)?;
            writeln!(f, "right is in: {}, count {}", player.right.is_in, player.right.count)?;
            writeln!(f, "left is in: {}, count {}", player.left.is_in, player.left.count)?;
            writeln!(f, "player is out: {}", player.is_loser)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
