//! Error types for the todo client.
//!
//! # Design
//! One enum covers the whole crate. Transport failures (`Network`) and
//! non-success statuses (`Http`) keep their diagnostic detail, but both map
//! to the same fixed user-facing message via [`SyncError::user_message`] —
//! the only surface the original UI exposed, while the real cause goes to
//! the diagnostic channel. `UnknownUser` and `MissingItem` are precondition
//! violations, not recoverable states.

use std::fmt;

/// Errors produced by the client, store, view, and controller flows.
#[derive(Debug)]
pub enum SyncError {
    /// The HTTP round trip itself failed (connectivity, DNS, I/O).
    Network(String),

    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// A todo referenced a userId absent from the store.
    UnknownUser(u64),

    /// No rendered item carries this id; the caller must guarantee existence.
    MissingItem(u64),

    /// A handler ran before the initial load completed.
    NotReady,
}

impl SyncError {
    /// The message shown to the user. Remote failures collapse into the fixed
    /// connect-error string; status and body stay on the variant for
    /// diagnostics. Local precondition violations display themselves.
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Network(_) | SyncError::Http { .. } => {
                "Failed to connect with the server! Please try later!".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Network(msg) => write!(f, "network error: {msg}"),
            SyncError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            SyncError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            SyncError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            SyncError::UnknownUser(id) => write!(f, "no user with id {id}"),
            SyncError::MissingItem(id) => write!(f, "no rendered item with id {id}"),
            SyncError::NotReady => write!(f, "initial load has not completed"),
        }
    }
}

impl std::error::Error for SyncError {}
