//! The game loop.
//!
//! `ChopsticksGame` owns the state and the random stream of one game. Each
//! turn it picks the next non-loser in seat order, asks the player's strategy
//! for an attack, applies it, and re-checks the win condition. Play stops the
//! moment a single non-loser remains, even partway through a round.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::core::{Attack, AttackRecord, GameConfig, GameRng, GameRngState, GameState, GameStatus, Player, PlayerId, Strategy};
use crate::error::{ChopsticksError, Result};
use crate::report::{NoopObserver, TurnObserver, TurnSnapshot};

use super::decision::decide;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: PlayerId,
    pub strategy: Strategy,
    /// Turns actually taken. Skipped losers do not count.
    pub turns: u32,
    pub player_count: usize,
    /// Wall-clock simulation time.
    pub elapsed: Duration,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let millis = self.elapsed.as_millis();
        writeln!(f, ">>> GAME RESULTS <<<")?;
        writeln!(f, "--------------------")?;
        writeln!(f, "Number of Players: {}", self.player_count)?;
        writeln!(f, "Number of Turns: {}", self.turns)?;
        writeln!(f, "Winner: {}", self.winner)?;
        writeln!(f, "Winning Strategy: {}", self.strategy)?;
        write!(
            f,
            "Calculation Time: {} minute(s) ({} seconds)",
            millis / 60_000,
            self.elapsed.as_secs_f64()
        )
    }
}

/// A single game of chopsticks.
#[derive(Clone, Debug)]
pub struct ChopsticksGame {
    state: GameState,
    rng: GameRng,
}

impl ChopsticksGame {
    /// Set up a fresh table for the configured lineup.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(&config.strategies),
            rng: GameRng::new(config.seed),
        })
    }

    /// Continue from an existing position.
    #[must_use]
    pub fn from_state(state: GameState, rng: GameRng) -> Self {
        Self { state, rng }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn snapshot(&self) -> TurnSnapshot {
        TurnSnapshot::capture(&self.state)
    }

    /// The last player standing, once the game is won.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.state.winner().map(|id| self.state.player(id))
    }

    /// Play one turn for the next non-loser.
    pub fn take_turn(&mut self) -> Result<AttackRecord> {
        let Some(actor) = self.state.next_player() else {
            return Err(ChopsticksError::GameAlreadyWon {
                winner: self.state.winner().unwrap_or_default(),
            });
        };

        let attack = decide(&self.state, actor, &mut self.rng)?;
        let record = self.state.apply_attack(attack)?;

        log::trace!("turn {}: {} (now {})", record.turn, attack, record.resulting_count);
        if record.eliminated {
            log::debug!("{} is out on turn {}", attack.target, record.turn);
        }

        Ok(record)
    }

    /// Play to the end.
    pub fn play(&mut self) -> Result<GameOutcome> {
        self.play_observed(&mut NoopObserver)
    }

    /// Play to the end, reporting the start and every turn to `observer`.
    pub fn play_observed(&mut self, observer: &mut dyn TurnObserver) -> Result<GameOutcome> {
        let started = Instant::now();

        observer.on_turn(&self.snapshot());
        while !self.state.is_won() {
            self.take_turn()?;
            observer.on_turn(&self.snapshot());
        }

        let outcome = self.outcome(started.elapsed());
        log::debug!(
            "{} ({}) wins after {} turns",
            outcome.winner,
            outcome.strategy,
            outcome.turns
        );
        Ok(outcome)
    }

    fn outcome(&self, elapsed: Duration) -> GameOutcome {
        let winner = match self.state.status() {
            GameStatus::Won(winner) => winner,
            GameStatus::InProgress => unreachable!("outcome requested before the game was won"),
        };

        GameOutcome {
            winner,
            strategy: self.state.player(winner).strategy(),
            turns: self.state.turns_taken(),
            player_count: self.state.player_count(),
            elapsed,
        }
    }
}

/// Rebuild a game from a fixed attack sequence.
///
/// No randomness is involved, so the same inputs always give the same state.
pub fn replay(config: &GameConfig, attacks: &[Attack]) -> Result<GameState> {
    config.validate()?;

    let mut state = GameState::new(&config.strategies);
    for &attack in attacks {
        state.apply_attack(attack)?;
    }
    Ok(state)
}

/// Play one game with the given config.
pub fn run_game(config: &GameConfig) -> Result<GameOutcome> {
    ChopsticksGame::new(config)?.play()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Handed;
    use crate::report::RecordingObserver;

    #[test]
    fn test_game_creation() {
        let game = ChopsticksGame::new(&GameConfig::new([Strategy::Fast, Strategy::Slow])).unwrap();
        assert_eq!(game.state().player_count(), 2);
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_single_player_rejected() {
        let result = ChopsticksGame::new(&GameConfig::new([Strategy::Fast]));
        assert!(matches!(result, Err(ChopsticksError::TooFewPlayers { count: 1 })));
    }

    #[test]
    fn test_fast_first_turn() {
        let mut game = ChopsticksGame::new(&GameConfig::new([Strategy::Fast, Strategy::Slow])).unwrap();

        let record = game.take_turn().unwrap();

        assert_eq!(
            record.attack,
            Attack::new(PlayerId::new(0), Handed::Right, PlayerId::new(1), Handed::Left)
        );
        assert_eq!(game.state().player(PlayerId::new(1)).hand(Handed::Left).count(), 2);
        assert_eq!(game.state().next_player(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_game_to_completion() {
        let mut game =
            ChopsticksGame::new(&GameConfig::new([Strategy::Aggressive, Strategy::Passive])).unwrap();

        let outcome = game.play().unwrap();

        assert!(game.state().is_won());
        assert_eq!(game.winner().map(Player::id), Some(outcome.winner));
        assert_eq!(outcome.turns, game.state().turns_taken());
        assert_eq!(outcome.player_count, 2);
    }

    #[test]
    fn test_turn_after_win_fails() {
        let mut game = ChopsticksGame::new(&GameConfig::new([Strategy::Fast, Strategy::Fast])).unwrap();
        let outcome = game.play().unwrap();

        assert_eq!(
            game.take_turn(),
            Err(ChopsticksError::GameAlreadyWon { winner: outcome.winner })
        );
    }

    #[test]
    fn test_observer_sees_every_turn() {
        let mut game = ChopsticksGame::new(&GameConfig::new([Strategy::Slow, Strategy::Fast])).unwrap();
        let mut recorder = RecordingObserver::default();

        let outcome = game.play_observed(&mut recorder).unwrap();

        assert_eq!(recorder.snapshots.len(), outcome.turns as usize + 1);
        let turns: Vec<u32> = recorder.snapshots.iter().map(|s| s.turn).collect();
        assert_eq!(turns, (0..=outcome.turns).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_game() {
        let config = GameConfig::new([Strategy::Random, Strategy::Random, Strategy::Random]).with_seed(77);

        let mut first = ChopsticksGame::new(&config).unwrap();
        let mut second = ChopsticksGame::new(&config).unwrap();
        first.play().unwrap();
        second.play().unwrap();

        assert_eq!(first.state(), second.state());
    }

    #[test]
    fn test_replay_matches_played_game() {
        let config = GameConfig::new([Strategy::Random, Strategy::Fast, Strategy::Slow]).with_seed(5);
        let mut game = ChopsticksGame::new(&config).unwrap();
        game.play().unwrap();

        let attacks: Vec<Attack> = game.state().history().iter().map(|r| r.attack).collect();
        let replayed = replay(&config, &attacks).unwrap();

        assert_eq!(&replayed, game.state());
    }

    #[test]
    fn test_outcome_text() {
        let outcome = GameOutcome {
            winner: PlayerId::new(1),
            strategy: Strategy::Passive,
            turns: 12,
            player_count: 2,
            elapsed: Duration::from_millis(1500),
        };
        let text = outcome.to_string();

        assert!(text.starts_with(">>> GAME RESULTS <<<"));
        assert!(text.contains("Number of Turns: 12"));
        assert!(text.contains("Winner: PLAYER 2"));
        assert!(text.contains("Winning Strategy: PASSIVE"));
        assert!(text.contains("Calculation Time: 0 minute(s) (1.5 seconds)"));
    }
}
