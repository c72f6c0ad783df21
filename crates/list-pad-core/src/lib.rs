//! Core list editing: the sequence store, its error kinds, and the session
//! that pairs the store with snapshot history.

pub mod error;
pub mod history;
pub mod session;
pub mod store;

pub use error::ListError;
pub use session::ListSession;
pub use store::{SequenceStore, DEFAULT_SEPARATOR};
