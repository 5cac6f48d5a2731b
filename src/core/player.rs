//! Players and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. The index is the
//! player's seat in turn order.
//!
//! ## Player
//!
//! Two hands, a strategy, and the loser flag. A player becomes a loser the
//! instant both hands are out and stays one.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::hand::{Hand, Handed, RaiseError};
use super::strategy::Strategy;
use crate::error::{ChopsticksError, Result};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`, shown as
/// `PLAYER 1` in reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use chopsticks::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PLAYER {}", self.index() + 1)
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    strategy: Strategy,
    left: Hand,
    right: Hand,
    is_loser: bool,
}

impl Player {
    /// A player with two fresh hands.
    #[must_use]
    pub fn new(id: PlayerId, strategy: Strategy) -> Self {
        Self::with_hands(id, strategy, Hand::new(Handed::Left), Hand::new(Handed::Right))
    }

    /// A player holding the given hands, e.g. to set up a mid-game position.
    #[must_use]
    pub fn with_hands(id: PlayerId, strategy: Strategy, left: Hand, right: Hand) -> Self {
        assert_eq!(left.handed(), Handed::Left, "Left slot needs a left hand");
        assert_eq!(right.handed(), Handed::Right, "Right slot needs a right hand");

        let is_loser = !left.is_in() && !right.is_in();
        Self {
            id,
            strategy,
            left,
            right,
            is_loser,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn is_loser(&self) -> bool {
        self.is_loser
    }

    #[must_use]
    pub fn hand(&self, handed: Handed) -> &Hand {
        match handed {
            Handed::Left => &self.left,
            Handed::Right => &self.right,
        }
    }

    fn hand_mut(&mut self, handed: Handed) -> &mut Hand {
        match handed {
            Handed::Left => &mut self.left,
            Handed::Right => &mut self.right,
        }
    }

    /// Hands still in play, left first.
    pub fn in_hands(&self) -> impl Iterator<Item = &Hand> {
        [&self.left, &self.right].into_iter().filter(|hand| hand.is_in())
    }

    /// Add this player's `own` hand to the opponent's `target` hand.
    ///
    /// Only the opponent is mutated; its loser flag is re-evaluated afterwards.
    /// The attacking hand must still be in.
    pub fn attack(&self, own: Handed, target: Handed, opponent: &mut Player) -> Result<()> {
        if opponent.id == self.id {
            return Err(ChopsticksError::IllegalTarget {
                attacker: self.id,
                target: opponent.id,
            });
        }
        if !self.hand(own).is_in() {
            return Err(ChopsticksError::AttackingHandOut {
                player: self.id,
                hand: own,
            });
        }

        opponent
            .hand_mut(target)
            .raise_fingers(self.hand(own))
            .map_err(|err| match err {
                RaiseError::DefenderOut => ChopsticksError::TargetHandOut {
                    player: opponent.id,
                    hand: target,
                },
                RaiseError::EmptyAttacker => ChopsticksError::EmptyAttackingHand {
                    player: self.id,
                    hand: own,
                },
            })?;

        opponent.update_loser();
        Ok(())
    }

    /// The highest in-hand. Ties go to the right hand.
    pub fn high_hand(&self) -> Result<Handed> {
        match (self.left.is_in(), self.right.is_in()) {
            (true, true) if self.left.count() > self.right.count() => Ok(Handed::Left),
            (true, true) => Ok(Handed::Right),
            (true, false) => Ok(Handed::Left),
            (false, true) => Ok(Handed::Right),
            (false, false) => Err(ChopsticksError::NoHandIn { player: self.id }),
        }
    }

    /// The lowest in-hand. Ties go to the right hand.
    pub fn low_hand(&self) -> Result<Handed> {
        match (self.left.is_in(), self.right.is_in()) {
            (true, true) if self.left.count() < self.right.count() => Ok(Handed::Left),
            (true, true) => Ok(Handed::Right),
            (true, false) => Ok(Handed::Left),
            (false, true) => Ok(Handed::Right),
            (false, false) => Err(ChopsticksError::NoHandIn { player: self.id }),
        }
    }

    fn update_loser(&mut self) {
        if !self.left.is_in() && !self.right.is_in() {
            self.is_loser = true;
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use chopsticks::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
