// Integration tests for the history system.
//
// These drive a HistoryCursor against a plain Vec<String> standing in for
// the live list, restoring whatever undo/redo hands back.

use list_pad_mod_history::{HistoryCursor, RedoPolicy, Snapshot};

struct Harness {
    live: Vec<String>,
    cursor: HistoryCursor,
}

impl Harness {
    fn new(policy: RedoPolicy) -> Self {
        Self {
            live: Vec::new(),
            cursor: HistoryCursor::with_policy(policy),
        }
    }

    fn snapshot(&self) -> Snapshot {
        self.live.iter().cloned().collect()
    }

    fn push(&mut self, value: &str) {
        self.cursor.record_before_mutation(self.snapshot());
        self.live.push(value.to_string());
    }

    fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.cursor.undo(current) {
            Some(snap) => {
                self.live = snap.to_vec();
                true
            }
            None => false,
        }
    }

    fn redo(&mut self) -> bool {
        match self.cursor.redo() {
            Some(snap) => {
                self.live = snap.to_vec();
                true
            }
            None => false,
        }
    }
}

#[test]
fn test_hundred_edits_undo_all_redo_all() {
    let mut h = Harness::new(RedoPolicy::Linear);
    for i in 0..100 {
        h.push(&format!("e{i}"));
    }

    let mut undone = 0;
    while h.undo() {
        undone += 1;
    }
    assert_eq!(undone, 100);
    assert!(h.live.is_empty());

    let mut redone = 0;
    while h.redo() {
        redone += 1;
        assert_eq!(h.live.len(), redone);
    }
    assert_eq!(redone, 100);
    assert_eq!(h.live.last().map(String::as_str), Some("e99"));
}

#[test]
fn test_undo_redo_interleaved() {
    let mut h = Harness::new(RedoPolicy::Linear);
    h.push("a");
    h.push("b");
    h.push("c");

    h.undo();
    h.undo();
    assert_eq!(h.live, ["a"]);
    h.redo();
    assert_eq!(h.live, ["a", "b"]);
    h.undo();
    assert_eq!(h.live, ["a"]);
    h.redo();
    h.redo();
    assert_eq!(h.live, ["a", "b", "c"]);
    assert!(!h.redo());
}

#[test]
fn test_branching_discards_old_future() {
    let mut h = Harness::new(RedoPolicy::Linear);
    h.push("a");
    h.push("b");
    h.undo();
    h.push("z");
    assert_eq!(h.live, ["a", "z"]);
    assert!(!h.redo());

    h.undo();
    h.undo();
    assert!(h.live.is_empty());
    h.redo();
    h.redo();
    assert_eq!(h.live, ["a", "z"]);
}

#[test]
fn test_legacy_history_grows_across_branches() {
    let mut h = Harness::new(RedoPolicy::Legacy);
    h.push("a");
    h.push("b");
    h.undo();
    h.push("z");
    assert_eq!(h.cursor.len(), 3);
    assert_eq!(h.live, ["a", "z"]);

    // Undo walks back through every recorded entry, stale ones included
    assert!(h.undo());
    assert_eq!(h.live, ["a"]);
    assert!(h.undo());
    assert_eq!(h.live, ["a"]);
    assert!(h.undo());
    assert!(h.live.is_empty());
    assert!(!h.undo());
}

#[test]
fn test_snapshots_are_shared_not_copied() {
    let mut h = Harness::new(RedoPolicy::Linear);
    h.push("a");
    h.push("b");
    let recorded = h.cursor.snapshots()[1].clone();
    let current = h.snapshot();
    let returned = h.cursor.undo(current).unwrap();
    assert!(returned.shares_storage_with(&recorded));
}
