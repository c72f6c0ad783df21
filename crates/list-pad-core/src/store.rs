/// Sequence store: the live, ordered list of strings being edited.
use std::collections::VecDeque;
use std::fmt;

use crate::error::ListError;
use crate::history::Snapshot;

/// Separator used when rendering the list as a single line.
pub const DEFAULT_SEPARATOR: &str = " -> ";

/// An ordered list of strings with O(1) edits at both ends.
///
/// Duplicates are allowed. Mutations never record history; the caller
/// checkpoints before mutating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceStore {
    items: VecDeque<String>,
}

impl<S: Into<String>> FromIterator<S> for SequenceStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for SequenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.traverse_to_string(DEFAULT_SEPARATOR))
    }
}

impl SequenceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements from head to tail.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    /// First element, if any.
    pub fn head(&self) -> Option<&str> {
        self.items.front().map(String::as_str)
    }

    /// Last element, if any.
    pub fn tail(&self) -> Option<&str> {
        self.items.back().map(String::as_str)
    }

    /// Element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Prepends `value`.
    pub fn insert_head(&mut self, value: impl Into<String>) {
        self.items.push_front(value.into());
    }

    /// Appends `value`.
    pub fn insert_tail(&mut self, value: impl Into<String>) {
        self.items.push_back(value.into());
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptySequence`] if the store is empty.
    pub fn remove_tail(&mut self) -> Result<String, ListError> {
        self.items.pop_back().ok_or(ListError::EmptySequence)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` (and changes nothing) when no element matches.
    pub fn remove_by_value(&mut self, value: &str) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => self.items.remove(index).is_some(),
            None => false,
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if `index` is negative or not below
    /// `len()`. The store is left unchanged.
    pub fn remove_by_index(&mut self, index: i64) -> Result<String, ListError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.remove(i))
            .ok_or_else(|| ListError::InvalidIndex(index.to_string()))
    }

    /// Takes an immutable copy of the current contents.
    pub fn snapshot(&self) -> Snapshot {
        self.items.iter().cloned().collect()
    }

    /// Replaces the contents wholesale with `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.items.clear();
        self.items.extend(snapshot.iter().cloned());
    }

    /// Renders the elements head to tail joined by `separator`.
    ///
    /// Returns an empty string for an empty store.
    pub fn traverse_to_string(&self, separator: &str) -> String {
        let parts: Vec<&str> = self.iter().collect();
        parts.join(separator)
    }
}
