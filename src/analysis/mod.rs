//! Batch analysis: which strategy wins most often.
//!
//! Runs many seeded games per lineup and tallies the winners. Only consumes
//! `GameOutcome`s; it never looks inside a game.

pub mod batch;
pub mod pairings;

pub use batch::{BatchConfig, BatchReport, BatchRunner, LineupTally};
pub use pairings::two_player_pairings;
