/// Snapshot-based undo/redo history.
///
/// Provides a `HistoryCursor` that records a full copy of the list before
/// every mutation and walks backward and forward through those copies.
/// Snapshots share their storage, so handing one out is cheap.
pub mod config;
pub mod cursor;
pub mod snapshot;

pub use config::{HistoryConfig, RedoPolicy};
pub use cursor::HistoryCursor;
pub use snapshot::Snapshot;
