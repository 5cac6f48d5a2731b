//! Per-strategy move selection.
//!
//! Each deterministic strategy is a pair of fixed choices: which of its own
//! hands the player attacks with, and which opponent hand it searches for.
//! RANDOM draws all three parts of its attack.

use crate::core::{Attack, GameRng, GameState, PlayerId, Strategy};
use crate::error::{ChopsticksError, Result};

use super::targeting::{find_candidates, highest_in_count, lowest_count, random_in_hand, random_opponent};

/// Which own hand a deterministic strategy attacks with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandChoice {
    Highest,
    Lowest,
}

/// Which opponent hand a deterministic strategy searches for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetChoice {
    /// The lowest opponent hand.
    Lowest,
    /// The highest opponent hand still in.
    HighestIn,
}

/// The fixed choices behind a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    /// Random opponent, random own hand, random target hand.
    Random,
    /// A fixed own-hand rule paired with a fixed target search.
    Fixed { hand: HandChoice, target: TargetChoice },
}

impl Plan {
    #[must_use]
    pub const fn for_strategy(strategy: Strategy) -> Self {
        let (hand, target) = match strategy {
            Strategy::Random => return Plan::Random,
            Strategy::Slow => (HandChoice::Lowest, TargetChoice::Lowest),
            Strategy::Fast => (HandChoice::Highest, TargetChoice::HighestIn),
            Strategy::Aggressive => (HandChoice::Highest, TargetChoice::Lowest),
            Strategy::Passive => (HandChoice::Lowest, TargetChoice::HighestIn),
        };
        Plan::Fixed { hand, target }
    }
}

/// Choose the attack `actor` makes this turn.
///
/// Random players draw the opponent first, then their own hand, then the
/// opponent's hand. Deterministic strategies never touch `rng`.
pub fn decide(state: &GameState, actor: PlayerId, rng: &mut GameRng) -> Result<Attack> {
    let player = state.player(actor);
    let strategy = player.strategy();
    let no_candidate = || ChopsticksError::NoCandidate { player: actor, strategy };

    let (hand, target) = match Plan::for_strategy(strategy) {
        Plan::Random => return decide_random(state, actor, rng),
        Plan::Fixed { hand, target } => (hand, target),
    };

    let count = match target {
        TargetChoice::Lowest => lowest_count(state, actor),
        TargetChoice::HighestIn => highest_in_count(state, actor),
    }
    .ok_or_else(no_candidate)?;

    let own = match hand {
        HandChoice::Highest => player.high_hand()?,
        HandChoice::Lowest => player.low_hand()?,
    };

    let first = find_candidates(state, actor, count)
        .into_iter()
        .next()
        .ok_or_else(no_candidate)?;

    Ok(Attack::new(actor, own, first.player, first.hand))
}

fn decide_random(state: &GameState, actor: PlayerId, rng: &mut GameRng) -> Result<Attack> {
    let player = state.player(actor);
    let target = random_opponent(state, actor, rng).ok_or(ChopsticksError::NoCandidate {
        player: actor,
        strategy: player.strategy(),
    })?;
    let own = random_in_hand(player, rng)?;
    let target_hand = random_in_hand(state.player(target), rng)?;

    Ok(Attack::new(actor, own, target, target_hand))
}
