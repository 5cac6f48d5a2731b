//! Turn observers.
//!
//! The engine hands every observer a snapshot of the starting position and
//! one after each turn. Observers never influence play.

use std::io::Write;

use super::snapshot::TurnSnapshot;

/// Receives a snapshot after every turn.
pub trait TurnObserver {
    fn on_turn(&mut self, snapshot: &TurnSnapshot);
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TurnObserver for NoopObserver {
    fn on_turn(&mut self, _snapshot: &TurnSnapshot) {}
}

/// Keeps every snapshot in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub snapshots: Vec<TurnSnapshot>,
}

impl TurnObserver for RecordingObserver {
    fn on_turn(&mut self, snapshot: &TurnSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}

/// Writes the status block of every turn to a writer.
///
/// Write failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct StatusPrinter<W: Write> {
    out: W,
}

impl<W: Write> StatusPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TurnObserver for StatusPrinter<W> {
    fn on_turn(&mut self, snapshot: &TurnSnapshot) {
        if let Err(err) = writeln!(self.out, "{snapshot}") {
            log::warn!("failed to write turn {} status: {err}", snapshot.turn);
        }
    }
}

/// Logs each turn at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl TurnObserver for LogObserver {
    fn on_turn(&mut self, snapshot: &TurnSnapshot) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }

        let hands: Vec<String> = snapshot
            .players
            .iter()
            .map(|p| format!("{}:L{}R{}", p.player.index() + 1, p.left.count, p.right.count))
            .collect();
        log::debug!("turn {}: {}", snapshot.turn, hands.join(" "));
    }
}
