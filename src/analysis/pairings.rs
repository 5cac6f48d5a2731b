//! Strategy lineups for batch analysis.

use crate::core::Strategy;

/// Every two-player lineup over [`Strategy::ALL`].
///
/// The five mirror matches come first. Then, for each pair of distinct
/// strategies `(a, b)` with `a` listed before `b`, the lineup `[a, b]` is
/// followed by `[b, a]` so both seatings are covered.
#[must_use]
pub fn two_player_pairings() -> Vec<[Strategy; 2]> {
    let all = Strategy::ALL;
    let mut pairings: Vec<[Strategy; 2]> = all.iter().map(|&s| [s, s]).collect();

    for (i, &first) in all.iter().enumerate() {
        for &second in &all[i + 1..] {
            pairings.push([first, second]);
            pairings.push([second, first]);
        }
    }

    pairings
}
