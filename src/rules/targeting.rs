//! Target searches over the table.
//!
//! Every search skips the acting player and scans the rest in seat order,
//! left hand before right. That scan order is also the tie-break: when
//! several opponent hands share the extreme count, the first one found is
//! the one attacked.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, GameState, Handed, Player, PlayerId};
use crate::error::{ChopsticksError, Result};

/// An opponent hand that may be attacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub player: PlayerId,
    pub hand: Handed,
}

/// Candidates in scan order. Most tables are small.
pub type Candidates = SmallVec<[Candidate; 8]>;

/// Lowest hand count among all other players.
///
/// Out hands are not excluded: they count 5 and never win the minimum while
/// any opponent is still in.
#[must_use]
pub fn lowest_count(state: &GameState, actor: PlayerId) -> Option<usize> {
    others(state, actor)
        .flat_map(|player| Handed::BOTH.map(|handed| player.hand(handed).count()))
        .min()
}

/// Highest count among other players' hands that are still in.
#[must_use]
pub fn highest_in_count(state: &GameState, actor: PlayerId) -> Option<usize> {
    others(state, actor)
        .flat_map(|player| player.in_hands())
        .map(|hand| hand.count())
        .max()
}

/// Every in-hand of a non-loser opponent whose count equals `count`.
#[must_use]
pub fn find_candidates(state: &GameState, actor: PlayerId, count: usize) -> Candidates {
    let mut candidates = Candidates::new();

    for player in others(state, actor).filter(|player| !player.is_loser()) {
        for hand in player.in_hands().filter(|hand| hand.count() == count) {
            candidates.push(Candidate {
                player: player.id(),
                hand: hand.handed(),
            });
        }
    }

    candidates
}

/// Uniformly random non-loser opponent.
pub fn random_opponent(state: &GameState, actor: PlayerId, rng: &mut GameRng) -> Option<PlayerId> {
    let opponents: SmallVec<[PlayerId; 8]> = others(state, actor)
        .filter(|player| !player.is_loser())
        .map(Player::id)
        .collect();

    rng.choose(&opponents).copied()
}

/// Coin flip between the two hands, forced to the other one if the pick is
/// out.
pub fn random_in_hand(player: &Player, rng: &mut GameRng) -> Result<Handed> {
    let pick = if rng.coin_flip() { Handed::Left } else { Handed::Right };

    if player.hand(pick).is_in() {
        Ok(pick)
    } else if player.hand(pick.other()).is_in() {
        Ok(pick.other())
    } else {
        Err(ChopsticksError::NoHandIn { player: player.id() })
    }
}

fn others(state: &GameState, actor: PlayerId) -> impl Iterator<Item = &Player> {
    state.players().iter().filter(move |player| player.id() != actor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hand, Strategy};

    fn seat(id: u8, left: usize, right: usize) -> Player {
        Player::with_hands(
            PlayerId::new(id),
            Strategy::Random,
            Hand::with_count(Handed::Left, left),
            Hand::with_count(Handed::Right, right),
        )
    }

    fn table(seats: &[(usize, usize)]) -> GameState {
        let players = seats
            .iter()
            .enumerate()
            .map(|(i, &(left, right))| seat(i as u8, left, right))
            .collect();
        GameState::from_players(players)
    }

    #[test]
    fn test_lowest_skips_actor() {
        let state = table(&[(1, 1), (3, 2), (4, 5)]);
        assert_eq!(lowest_count(&state, PlayerId::new(0)), Some(2));
        assert_eq!(lowest_count(&state, PlayerId::new(1)), Some(1));
    }

    #[test]
    fn test_highest_ignores_out_hands() {
        let state = table(&[(1, 1), (5, 2), (3, 4)]);
        assert_eq!(highest_in_count(&state, PlayerId::new(0)), Some(4));
        assert_eq!(highest_in_count(&state, PlayerId::new(2)), Some(2));
    }

    #[test]
    fn test_find_candidates_scan_order() {
        let state = table(&[(1, 1), (2, 2), (3, 2)]);
        let candidates = find_candidates(&state, PlayerId::new(0), 2);

        assert_eq!(
            candidates.as_slice(),
            &[
                Candidate { player: PlayerId::new(1), hand: Handed::Left },
                Candidate { player: PlayerId::new(1), hand: Handed::Right },
                Candidate { player: PlayerId::new(2), hand: Handed::Right },
            ]
        );
    }

    #[test]
    fn test_find_candidates_skips_losers_and_out_hands() {
        let state = table(&[(1, 1), (5, 5), (5, 4)]);
        assert!(find_candidates(&state, PlayerId::new(0), 5).is_empty());
        assert_eq!(find_candidates(&state, PlayerId::new(0), 4).len(), 1);
    }

    #[test]
    fn test_random_opponent_never_self_or_loser() {
        let state = table(&[(1, 1), (5, 5), (2, 3), (1, 4)]);
        let mut rng = GameRng::new(11);

        for _ in 0..100 {
            let opponent = random_opponent(&state, PlayerId::new(0), &mut rng).unwrap();
            assert_ne!(opponent, PlayerId::new(0));
            assert_ne!(opponent, PlayerId::new(1));
        }
    }

    #[test]
    fn test_random_in_hand_is_forced() {
        let player = seat(0, 5, 3);
        let mut rng = GameRng::new(5);

        for _ in 0..20 {
            assert_eq!(random_in_hand(&player, &mut rng).unwrap(), Handed::Right);
        }

        let loser = seat(1, 5, 5);
        assert_eq!(
            random_in_hand(&loser, &mut rng),
            Err(ChopsticksError::NoHandIn { player: PlayerId::new(1) })
        );
    }

    #[test]
    fn test_random_in_hand_uses_both() {
        let player = seat(0, 2, 2);
        let mut rng = GameRng::new(8);
        let picks: Vec<_> = (0..64).map(|_| random_in_hand(&player, &mut rng).unwrap()).collect();

        assert!(picks.contains(&Handed::Left));
        assert!(picks.contains(&Handed::Right));
    }
}
