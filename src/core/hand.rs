//! Fingers and hands.
//!
//! A hand is a row of [`FINGER_COUNT`] fingers that are always raised
//! contiguously from index 0, so the number of raised fingers is the index of
//! the first lowered one. A hand with every finger raised is out and never
//! changes again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fingers on a hand.
pub const FINGER_COUNT: usize = 5;

/// Which of a player's two hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handed {
    Left,
    Right,
}

impl Handed {
    /// Fixed scan order used by every search: left, then right.
    pub const BOTH: [Handed; 2] = [Handed::Left, Handed::Right];

    /// The other hand.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Handed::Left => Handed::Right,
            Handed::Right => Handed::Left,
        }
    }
}

impl std::fmt::Display for Handed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handed::Left => write!(f, "LEFT"),
            Handed::Right => write!(f, "RIGHT"),
        }
    }
}

/// A single finger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finger {
    raised: bool,
}

impl Finger {
    pub fn raise(&mut self) {
        self.raised = true;
    }

    #[must_use]
    pub const fn is_raised(self) -> bool {
        self.raised
    }
}

/// Why a raise was refused. The owning player attaches identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RaiseError {
    #[error("defending hand is already out")]
    DefenderOut,
    #[error("attacking hand has no raised fingers")]
    EmptyAttacker,
}

/// One hand of a player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    fingers: [Finger; FINGER_COUNT],
    handed: Handed,
    is_in: bool,
}

impl Hand {
    /// A fresh hand: one finger raised, still in.
    #[must_use]
    pub fn new(handed: Handed) -> Self {
        Self::with_count(handed, 1)
    }

    /// A hand with the first `count` fingers raised.
    ///
    /// `count == FINGER_COUNT` yields a hand that is already out.
    #[must_use]
    pub fn with_count(handed: Handed, count: usize) -> Self {
        assert!(count <= FINGER_COUNT, "A hand has only {FINGER_COUNT} fingers");

        let mut fingers = [Finger::default(); FINGER_COUNT];
        for finger in fingers.iter_mut().take(count) {
            finger.raise();
        }

        Self {
            fingers,
            handed,
            is_in: count < FINGER_COUNT,
        }
    }

    #[must_use]
    pub fn handed(&self) -> Handed {
        self.handed
    }

    #[must_use]
    pub fn is_in(&self) -> bool {
        self.is_in
    }

    #[must_use]
    pub fn fingers(&self) -> &[Finger; FINGER_COUNT] {
        &self.fingers
    }

    /// Number of raised fingers, counted contiguously from index 0.
    #[must_use]
    pub fn count(&self) -> usize {
        self.fingers
            .iter()
            .position(|finger| !finger.is_raised())
            .unwrap_or(FINGER_COUNT)
    }

    /// Add the attacking hand's raised fingers to this hand.
    ///
    /// One finger is raised per raised attacking finger, lowest slot first.
    /// Raising stops as soon as this hand is full, so an attack of 3 on a
    /// hand of 4 leaves it at exactly 5.
    pub fn raise_fingers(&mut self, attacking: &Hand) -> Result<(), RaiseError> {
        if !self.is_in {
            return Err(RaiseError::DefenderOut);
        }

        let attack = attacking.count();
        if attack == 0 {
            return Err(RaiseError::EmptyAttacker);
        }

        let start = self.count();
        for slot in start..start + attack {
            self.fingers[slot].raise();
            self.update_in();
            if !self.is_in {
                break;
            }
        }

        Ok(())
    }

    // Only the last finger decides whether the hand is full.
    fn update_in(&mut self) {
        if self.fingers[FINGER_COUNT - 1].is_raised() {
            self.is_in = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hand() {
        let hand = Hand::new(Handed::Left);
        assert_eq!(hand.count(), 1);
        assert!(hand.is_in());
        assert_eq!(hand.handed(), Handed::Left);
        assert!(hand.fingers()[0].is_raised());
        assert!(!hand.fingers()[1].is_raised());
    }

    #[test]
    fn test_with_count_full_is_out() {
        let hand = Hand::with_count(Handed::Right, 5);
        assert_eq!(hand.count(), 5);
        assert!(!hand.is_in());

        let empty = Hand::with_count(Handed::Right, 0);
        assert_eq!(empty.count(), 0);
        assert!(empty.is_in());
    }

    #[test]
    fn test_raise_adds_attacking_count() {
        let mut defender = Hand::new(Handed::Right);
        let attacker = Hand::with_count(Handed::Left, 2);

        defender.raise_fingers(&attacker).unwrap();

        assert_eq!(defender.count(), 3);
        assert!(defender.is_in());
    }

    #[test]
    fn test_raise_stops_at_full() {
        let mut defender = Hand::with_count(Handed::Left, 4);
        let attacker = Hand::with_count(Handed::Right, 3);

        defender.raise_fingers(&attacker).unwrap();

        assert_eq!(defender.count(), 5);
        assert!(!defender.is_in());
    }

    #[test]
    fn test_raise_exactly_to_full() {
        let mut defender = Hand::with_count(Handed::Left, 2);
        let attacker = Hand::with_count(Handed::Right, 3);

        defender.raise_fingers(&attacker).unwrap();

        assert_eq!(defender.count(), 5);
        assert!(!defender.is_in());
    }

    #[test]
    fn test_raise_does_not_mutate_attacker() {
        let mut defender = Hand::new(Handed::Left);
        let attacker = Hand::with_count(Handed::Right, 4);

        defender.raise_fingers(&attacker).unwrap();

        assert_eq!(attacker.count(), 4);
        assert!(attacker.is_in());
    }

    #[test]
    fn test_raise_with_empty_attacker_fails() {
        let mut defender = Hand::new(Handed::Left);
        let attacker = Hand::with_count(Handed::Right, 0);

        assert_eq!(defender.raise_fingers(&attacker), Err(RaiseError::EmptyAttacker));
        assert_eq!(defender.count(), 1);
    }

    #[test]
    fn test_raise_on_out_hand_fails() {
        let mut defender = Hand::with_count(Handed::Left, 5);
        let attacker = Hand::new(Handed::Right);

        assert_eq!(defender.raise_fingers(&attacker), Err(RaiseError::DefenderOut));
        assert_eq!(defender.count(), 5);
    }

    #[test]
    fn test_handed_other() {
        assert_eq!(Handed::Left.other(), Handed::Right);
        assert_eq!(Handed::Right.other(), Handed::Left);
        assert_eq!(Handed::Left.to_string(), "LEFT");
    }

    #[test]
    fn test_hand_serialization() {
        let hand = Hand::with_count(Handed::Right, 3);
        let json = serde_json::to_string(&hand).unwrap();
        let deserialized: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, deserialized);
    }
}
