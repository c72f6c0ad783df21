// Re-exports from list-pad-mod-history so downstream crates only depend on
// list-pad-core for the history types they touch.
pub use list_pad_mod_history::{HistoryConfig, HistoryCursor, RedoPolicy, Snapshot};
