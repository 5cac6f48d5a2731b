//! Turn resolution.
//!
//! - `targeting`: searches over opponent hands
//! - `decision`: what each strategy does with those searches
//! - `engine`: the game loop, win detection, and replay

pub mod decision;
pub mod engine;
pub mod targeting;

pub use decision::{decide, HandChoice, Plan, TargetChoice};
pub use engine::{replay, run_game, ChopsticksGame, GameOutcome};
pub use targeting::{Candidate, Candidates};
