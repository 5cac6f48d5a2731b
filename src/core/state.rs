//! Game state: the table, turn progress, and history.
//!
//! State only moves forward: fingers are only raised, hands only go out,
//! players only become losers. Losers keep their seat so player indices stay
//! stable for the whole game.

use serde::{Deserialize, Serialize};

use super::action::{Attack, AttackRecord};
use super::player::{Player, PlayerId};
use super::strategy::Strategy;
use crate::error::{ChopsticksError, Result};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// Exactly one non-loser remains.
    Won(PlayerId),
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: Vec<Player>,
    status: GameStatus,

    /// Turns taken so far.
    turns_taken: u32,

    /// Seat whose turn comes next (before skipping losers).
    next_seat: usize,

    /// Every attack in order.
    history: Vec<AttackRecord>,
}

impl GameState {
    /// Fresh table: one player per strategy, every hand at 1.
    ///
    /// The lineup must already be validated; see `GameConfig::validate`.
    #[must_use]
    pub fn new(strategies: &[Strategy]) -> Self {
        let players = PlayerId::all(strategies.len())
            .zip(strategies)
            .map(|(id, &strategy)| Player::new(id, strategy))
            .collect();

        Self::from_players(players)
    }

    /// Table from explicit players, e.g. a mid-game position.
    ///
    /// Player `i` must carry `PlayerId(i)` and at least one player must still
    /// be in. A table with a single survivor starts out won.
    #[must_use]
    pub fn from_players(players: Vec<Player>) -> Self {
        assert!(
            players
                .iter()
                .enumerate()
                .all(|(i, player)| player.id().index() == i),
            "Players must be seated in id order"
        );
        assert!(
            players.iter().any(|player| !player.is_loser()),
            "At least one player must still be in"
        );

        let mut state = Self {
            players,
            status: GameStatus::InProgress,
            turns_taken: 0,
            next_seat: 0,
            history: Vec::new(),
        };
        state.update_status();
        state
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Players who are not losers.
    pub fn remaining(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| !player.is_loser())
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining().count()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Won(winner) => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    #[must_use]
    pub fn history(&self) -> &[AttackRecord] {
        &self.history
    }

    /// The next player to act, skipping losers. `None` once the game is won.
    #[must_use]
    pub fn next_player(&self) -> Option<PlayerId> {
        if self.is_won() {
            return None;
        }

        let count = self.players.len();
        (0..count)
            .map(|offset| &self.players[(self.next_seat + offset) % count])
            .find(|player| !player.is_loser())
            .map(Player::id)
    }

    /// Apply a single attack as one turn.
    ///
    /// Turn order is not enforced here, so any legal attack sequence can be
    /// replayed. The turn pointer moves past the attacker and the win
    /// condition is re-checked.
    pub fn apply_attack(&mut self, attack: Attack) -> Result<AttackRecord> {
        if let GameStatus::Won(winner) = self.status {
            return Err(ChopsticksError::GameAlreadyWon { winner });
        }

        let count = self.players.len();
        let illegal = ChopsticksError::IllegalTarget {
            attacker: attack.attacker,
            target: attack.target,
        };
        if attack.attacker.index() >= count
            || attack.target.index() >= count
            || attack.attacker == attack.target
            || self.player(attack.attacker).is_loser()
            || self.player(attack.target).is_loser()
        {
            return Err(illegal);
        }

        let (attacker, target) = pair_mut(&mut self.players, attack.attacker, attack.target);
        attacker.attack(attack.attacking_hand, attack.target_hand, target)?;

        self.turns_taken += 1;
        self.next_seat = (attack.attacker.index() + 1) % count;

        let target = self.player(attack.target);
        let record = AttackRecord {
            turn: self.turns_taken,
            attack,
            resulting_count: target.hand(attack.target_hand).count(),
            eliminated: target.is_loser(),
        };
        self.history.push(record);
        self.update_status();

        Ok(record)
    }

    fn update_status(&mut self) {
        let last_standing = {
            let mut remaining = self.remaining();
            match (remaining.next(), remaining.next()) {
                (Some(last), None) => Some(last.id()),
                _ => None,
            }
        };
        if let Some(winner) = last_standing {
            self.status = GameStatus::Won(winner);
        }
    }
}

/// Two distinct players borrowed mutably at once.
fn pair_mut(players: &mut [Player], a: PlayerId, b: PlayerId) -> (&mut Player, &mut Player) {
    let (a, b) = (a.index(), b.index());
    assert_ne!(a, b, "Cannot borrow the same player twice");

    if a < b {
        let (low, high) = players.split_at_mut(b);
        (&mut low[a], &mut high[0])
    } else {
        let (low, high) = players.split_at_mut(a);
        (&mut high[0], &mut low[b])
    }
}
