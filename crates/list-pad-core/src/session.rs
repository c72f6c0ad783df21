/// A list being edited together with its undo/redo history.
///
/// Every public action mirrors one button of the UI. Mutating actions
/// validate their input first, checkpoint the store into the history, and
/// only then apply the edit, so a rejected action never leaves a stray
/// history entry behind.
use crate::error::ListError;
use crate::history::{HistoryConfig, HistoryCursor, RedoPolicy};
use crate::store::{SequenceStore, DEFAULT_SEPARATOR};

/// Editing session: a [`SequenceStore`] plus its [`HistoryCursor`].
#[derive(Debug)]
pub struct ListSession {
    store: SequenceStore,
    history: HistoryCursor,
    separator: String,
}

impl Default for ListSession {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

/// Trims `text`, rejecting blank input.
fn non_blank(text: &str) -> Result<&str, ListError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ListError::EmptyInput)
    } else {
        Ok(trimmed)
    }
}

impl ListSession {
    /// Creates an empty session.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            store: SequenceStore::new(),
            history: HistoryCursor::new(config),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Appends `items` without recording history.
    ///
    /// Blank items are skipped. Used to seed the list at startup.
    pub fn seed<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            if let Ok(value) = non_blank(item.as_ref()) {
                self.store.insert_tail(value);
            }
        }
    }

    /// Read access to the live list.
    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    /// Read access to the history.
    pub fn history(&self) -> &HistoryCursor {
        &self.history
    }

    /// Separator used by [`traverse`](Self::traverse).
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Sets the traversal separator. An empty separator restores the default.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        let separator = separator.into();
        self.separator = if separator.is_empty() {
            DEFAULT_SEPARATOR.to_string()
        } else {
            separator
        };
    }

    /// Active redo policy.
    pub fn redo_policy(&self) -> RedoPolicy {
        self.history.policy()
    }

    /// Switches the redo policy without discarding history.
    pub fn set_redo_policy(&mut self, policy: RedoPolicy) {
        self.history.set_policy(policy);
    }

    fn checkpoint(&mut self) {
        self.history.record_before_mutation(self.store.snapshot());
    }

    /// "Add (Tail)": appends the trimmed text.
    pub fn add_tail(&mut self, text: &str) -> Result<(), ListError> {
        let value = non_blank(text)?;
        self.checkpoint();
        self.store.insert_tail(value);
        tracing::debug!(value, len = self.store.len(), "added at tail");
        Ok(())
    }

    /// "Push (Head)": prepends the trimmed text.
    pub fn push_head(&mut self, text: &str) -> Result<(), ListError> {
        let value = non_blank(text)?;
        self.checkpoint();
        self.store.insert_head(value);
        tracing::debug!(value, len = self.store.len(), "pushed at head");
        Ok(())
    }

    /// "Pop (Tail)": removes and returns the last element.
    pub fn pop_tail(&mut self) -> Result<String, ListError> {
        if self.store.is_empty() {
            return Err(ListError::EmptySequence);
        }
        self.checkpoint();
        let removed = self.store.remove_tail()?;
        tracing::debug!(removed, len = self.store.len(), "popped tail");
        Ok(removed)
    }

    /// "Remove": drops the first element equal to the trimmed text.
    ///
    /// A checkpoint is recorded even when nothing matches. Returns whether an
    /// element was removed.
    pub fn remove_value(&mut self, text: &str) -> Result<bool, ListError> {
        let value = non_blank(text)?;
        self.checkpoint();
        let removed = self.store.remove_by_value(value);
        tracing::debug!(value, removed, "remove by value");
        Ok(removed)
    }

    /// "Pop Index": parses `text` as an index and removes that element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyInput`] for blank text, [`ListError::InvalidIndex`]
    /// if the text is not an integer or is out of range.
    pub fn pop_index(&mut self, text: &str) -> Result<String, ListError> {
        let raw = non_blank(text)?;
        let index: i64 = raw
            .parse()
            .map_err(|_| ListError::InvalidIndex(raw.to_string()))?;
        let in_range = usize::try_from(index).is_ok_and(|i| i < self.store.len());
        if !in_range {
            tracing::debug!(index, len = self.store.len(), "index out of range");
            return Err(ListError::InvalidIndex(raw.to_string()));
        }
        self.checkpoint();
        let removed = self.store.remove_by_index(index)?;
        tracing::debug!(index, removed, "popped index");
        Ok(removed)
    }

    /// Restores the previous snapshot. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.store.snapshot()) {
            Some(snapshot) => {
                self.store.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot. Returns `false` if there was none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.store.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// "Traverse": the list rendered head to tail.
    pub fn traverse(&self) -> String {
        self.store.traverse_to_string(&self.separator)
    }
}
