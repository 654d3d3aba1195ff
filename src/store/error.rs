//! Credential store error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong in the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StoreErrorKind {
    /// The username is already registered.
    #[display("user '{}' already exists", _0)]
    AlreadyExists(String),
    /// Reading or writing the credentials file failed.
    #[display("I/O error on '{}': {}", path, reason)]
    Io {
        /// File the operation was working on.
        path: String,
        /// Underlying I/O error, rendered.
        reason: String,
    },
}

/// Credential store error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Store error: {} at {}:{}", kind, file, line)]
pub struct StoreError {
    /// What failed.
    pub kind: StoreErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: StoreErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates an `AlreadyExists` error for `username`.
    #[track_caller]
    pub fn already_exists(username: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::AlreadyExists(username.into()))
    }

    /// Creates an `Io` error for the file at `path`.
    #[track_caller]
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::new(StoreErrorKind::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }

    /// Returns true if this is an `AlreadyExists` error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self.kind, StoreErrorKind::AlreadyExists(_))
    }
}
