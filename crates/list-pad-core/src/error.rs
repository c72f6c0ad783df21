/// Error kinds reported by list operations.
use thiserror::Error;

/// Why a list action was not performed.
///
/// Every variant is a recoverable no-op: the list is left untouched and no
/// history is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The input text was blank after trimming.
    #[error("input is empty")]
    EmptyInput,
    /// The index text was not an integer or fell outside the list.
    #[error("Invalid index: {0}")]
    InvalidIndex(String),
    /// Tried to remove from an empty list.
    #[error("the list is empty")]
    EmptySequence,
}

impl ListError {
    /// Whether the user should be told about this failure.
    ///
    /// Blank input and popping an empty list are ignored silently.
    pub fn should_notify(&self) -> bool {
        matches!(self, ListError::InvalidIndex(_))
    }

    /// Message shown in the notification dialog.
    pub fn user_message(&self) -> &'static str {
        match self {
            ListError::EmptyInput => "Nothing to do: the input is empty",
            ListError::InvalidIndex(_) => "Invalid index",
            ListError::EmptySequence => "The list is empty",
        }
    }
}
