/// Immutable, structurally shared copies of the list contents.
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A frozen copy of the list at one instant.
///
/// Cloning is O(1): all clones point at the same buffer, which is never
/// mutated after construction.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    items: Arc<[String]>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of elements captured.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the captured list was empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the captured elements in order.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Whether two snapshots share the same underlying buffer.
    pub fn shares_storage_with(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl Deref for Snapshot {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.items
    }
}

impl<S: Into<String>> FromIterator<S> for Snapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let items: Vec<String> = iter.into_iter().map(Into::into).collect();
        Self {
            items: items.into(),
        }
    }
}

impl From<Vec<String>> for Snapshot {
    fn from(items: Vec<String>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
