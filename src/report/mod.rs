//! Reporting hooks: turn snapshots and the observers that consume them.
//!
//! Nothing here is read back by the engine.

pub mod observer;
pub mod snapshot;

pub use observer::{LogObserver, NoopObserver, RecordingObserver, StatusPrinter, TurnObserver};
pub use snapshot::{HandSnapshot, PlayerSnapshot, TurnSnapshot};
