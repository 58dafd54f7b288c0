//! Error types for picking sessions.

use thiserror::Error;

use wp_core::PickError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while processing session input.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The registry or selector rejected the request.
    #[error("{0}")]
    Pick(#[from] PickError),

    /// The first word of the input is not a known command.
    #[error("unknown command: {0} (type 'help' for commands)")]
    UnknownCommand(String),

    /// A known command was given malformed arguments.
    #[error("usage: {0}")]
    Usage(String),
}
