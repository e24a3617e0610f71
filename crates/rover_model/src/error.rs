//! Error types for the rover system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// The main error type for rover operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates a missing argument error.
    #[must_use]
    pub const fn missing_argument(usage: &'static str) -> Self {
        Self::new(ErrorKind::MissingArgument { usage })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(expected: &'static str, got: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            expected,
            got: got.into(),
        })
    }

    /// Creates an invalid heading error.
    #[must_use]
    pub fn invalid_heading(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidHeading(token.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Command token did not match any registered command or alias.
    #[error("unknown command: {0} (type HELP for a list of commands)")]
    UnknownCommand(String),

    /// A required argument was absent.
    #[error("missing argument (usage: {usage})")]
    MissingArgument {
        /// Usage line for the command that was missing an argument.
        usage: &'static str,
    },

    /// An argument was present but malformed.
    #[error("expected {expected}, got: {got}")]
    InvalidArgument {
        /// Description of the expected form.
        expected: &'static str,
        /// The offending token.
        got: String,
    },

    /// A heading token was not one of N, E, S, W.
    #[error("invalid heading: {0} (expected one of N, E, S, W)")]
    InvalidHeading(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias for results with rover errors.
pub type Result<T> = std::result::Result<T, Error>;
