/// Snapshot history navigated by a single cursor.
///
/// The owner records a snapshot right before each mutation. Undo and redo
/// return the snapshot the owner should restore; the cursor itself never
/// touches the live list.
use crate::config::{HistoryConfig, RedoPolicy};
use crate::snapshot::Snapshot;

/// Undo/redo history for one list.
///
/// `pos` ranges over `0..=history.len()`. `pos == history.len()` is the live
/// edge: nothing has been undone since the last recorded mutation. Below the
/// live edge, `history[pos]` is the snapshot currently on display.
#[derive(Debug, Default)]
pub struct HistoryCursor {
    /// Recorded snapshots, oldest first.
    history: Vec<Snapshot>,
    /// Cursor into `history`.
    pos: usize,
    /// Set when a `Legacy` redo stepped onto the live edge, so the list
    /// still shows `history[len - 1]`.
    stale_live_edge: bool,
    config: HistoryConfig,
}

impl HistoryCursor {
    /// Creates an empty history.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            history: Vec::new(),
            pos: 0,
            stale_live_edge: false,
            config,
        }
    }

    /// Creates an empty history with the given redo policy.
    pub fn with_policy(redo_policy: RedoPolicy) -> Self {
        Self::new(HistoryConfig::with_policy(redo_policy))
    }

    /// Returns the active redo policy.
    pub fn policy(&self) -> RedoPolicy {
        self.config.redo_policy
    }

    /// Switches the redo policy. Recorded snapshots are kept.
    ///
    /// Moving to `Linear` after a `Legacy` redo ran onto the live edge puts
    /// the cursor back on the snapshot on display, so the next undo steps
    /// to an earlier state.
    pub fn set_policy(&mut self, redo_policy: RedoPolicy) {
        if self.config.redo_policy == redo_policy {
            return;
        }
        tracing::debug!(from = %self.config.redo_policy, to = %redo_policy, "redo policy changed");
        self.config.redo_policy = redo_policy;
        if redo_policy == RedoPolicy::Linear && self.stale_live_edge && self.at_live_edge() {
            self.pos = self.history.len() - 1;
            tracing::debug!(pos = self.pos, "cursor moved onto displayed snapshot");
        }
        self.stale_live_edge = false;
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Current cursor position, in `0..=len()`.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor sits on the live edge.
    pub fn at_live_edge(&self) -> bool {
        self.pos == self.history.len()
    }

    /// Recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.history
    }

    /// Records the state of the list immediately before a mutation.
    ///
    /// Moves the cursor to the live edge. Under `Linear`, any snapshots at or
    /// beyond the cursor are dropped first, so redo is no longer available.
    pub fn record_before_mutation(&mut self, snapshot: Snapshot) {
        if self.config.redo_policy == RedoPolicy::Linear && self.pos < self.history.len() {
            let pruned = self.history.len() - self.pos;
            self.history.truncate(self.pos);
            tracing::debug!(pruned, "dropped redo branch");
        }
        self.history.push(snapshot);
        self.pos = self.history.len();
        self.stale_live_edge = false;
        tracing::trace!(len = self.history.len(), "recorded snapshot");
    }

    /// Steps back one snapshot.
    ///
    /// `current` is the live list contents. Under `Linear`, the first undo
    /// from the live edge keeps it as the newest entry so a later redo can
    /// return to it. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if self.pos == 0 {
            return None;
        }
        if self.config.redo_policy == RedoPolicy::Linear && self.at_live_edge() {
            self.history.push(current);
        }
        self.pos -= 1;
        self.stale_live_edge = false;
        tracing::debug!(pos = self.pos, len = self.history.len(), "undo");
        self.history.get(self.pos).cloned()
    }

    /// Steps forward one snapshot.
    ///
    /// Returns `None` when there is nothing to redo. Under `Legacy` the
    /// cursor still advances one step when it was below the live edge, even
    /// if nothing is returned.
    pub fn redo(&mut self) -> Option<Snapshot> {
        match self.config.redo_policy {
            RedoPolicy::Linear => {
                if self.pos + 1 >= self.history.len() {
                    return None;
                }
                self.pos += 1;
            }
            RedoPolicy::Legacy => {
                if self.pos >= self.history.len() {
                    return None;
                }
                self.pos += 1;
                if self.pos >= self.history.len() {
                    self.stale_live_edge = true;
                    tracing::debug!(pos = self.pos, "redo stepped onto the live edge");
                    return None;
                }
            }
        }
        tracing::debug!(pos = self.pos, len = self.history.len(), "redo");
        self.history.get(self.pos).cloned()
    }

    /// Whether `undo` would return a snapshot.
    pub fn can_undo(&self) -> bool {
        self.pos > 0
    }

    /// Whether `redo` would return a snapshot.
    pub fn can_redo(&self) -> bool {
        self.pos + 1 < self.history.len()
    }

    /// Forgets all recorded snapshots.
    pub fn clear(&mut self) {
        self.history.clear();
        self.pos = 0;
        self.stale_live_edge = false;
    }
}
