//! Batch runner tests: pairing coverage, tallies, and run-mode independence.

use chopsticks::core::PlayerId;
use chopsticks::{two_player_pairings, BatchConfig, BatchRunner, Strategy};

fn runner(games: u32, parallel: bool) -> BatchRunner {
    BatchRunner::new(BatchConfig::new().with_games(games).with_seed(7).with_parallel(parallel)).unwrap()
}

#[test]
fn test_two_player_batch_covers_every_pairing() {
    let report = runner(3, true).run_two_player().unwrap();

    assert_eq!(report.pairings.len(), 25);
    assert_eq!(report.total_games(), 75);
    for (index, (tally, pairing)) in report.pairings.iter().zip(two_player_pairings()).enumerate() {
        assert_eq!(tally.number, index + 1);
        assert_eq!(tally.lineup, pairing.to_vec());
        assert_eq!(tally.seat_wins.values().sum::<u32>(), 3);
    }

    let totals = report.strategy_totals();
    assert_eq!(totals.values().sum::<u32>(), 75);
}

#[test]
fn test_parallel_matches_sequential() {
    let parallel = runner(12, true).run_two_player().unwrap();
    let sequential = runner(12, false).run_two_player().unwrap();

    assert_eq!(parallel.pairings, sequential.pairings);
}

#[test]
fn test_deterministic_lineup_repeats_one_game() {
    // Without randomness every game of a lineup is the same game.
    let tally = runner(10, true).run_lineup(0, &[Strategy::Slow, Strategy::Fast]).unwrap();

    let first = tally.seat_wins[PlayerId::new(0)];
    assert!(first == 0 || first == 10);
    assert_eq!(tally.total_turns % 10, 0);
}

#[test]
fn test_multi_player_lineups() {
    let lineups = vec![
        vec![Strategy::Random, Strategy::Fast, Strategy::Slow],
        vec![Strategy::Aggressive, Strategy::Passive, Strategy::Random, Strategy::Slow],
    ];
    let report = runner(5, true).run_lineups(&lineups).unwrap();

    assert_eq!(report.pairings.len(), 2);
    assert_eq!(report.pairings[1].seat_wins.player_count(), 4);
    assert_eq!(report.total_games(), 10);
}

#[test]
fn test_report_text() {
    let report = runner(2, false).run_two_player().unwrap();
    let text = report.to_string();

    assert!(text.starts_with("Pairing 1:\nRANDOM with "));
    assert!(text.contains("Pairing 25:\nPASSIVE with "));
    assert!(text.contains("Total wins over 50 games:"));
    for strategy in Strategy::ALL {
        assert!(text.contains(&format!("{strategy}: ")));
    }
}

#[test]
fn test_report_serializes() {
    let report = runner(1, false).run_two_player().unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["config"]["games_per_pairing"], 1);
    assert_eq!(json["pairings"].as_array().unwrap().len(), 25);
}
