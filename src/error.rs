//! Error types of this crate.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Returned when a render script cannot be loaded.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// The file that failed to parse.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// What went wrong.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}: {}", self.path.display(), self.msg)
    }
}

/// Everything that can go wrong while template functions run against a scope.
#[derive(Debug, Error)]
pub enum Error {
    /// A scope key was read or modified before its initializer ran
    #[error("Scope key '{key}' is used before it was initialized")]
    UninitializedState {
        /// The unbound key
        key: String,
    },

    /// A value under a well-known key does not have the expected shape
    #[error("Scope key '{key}' holds a malformed value: {reason}")]
    MalformedState {
        /// The offending key
        key: String,
        /// Description of the mismatch
        reason: String,
    },

    /// `addEmitter` referenced a rule that was never added
    #[error("The rule '{0}' is referenced but never defined")]
    RuleNotFound(String),

    /// The host called a function that does not exist
    #[error("Unknown template function: {0}")]
    UnknownFunction(String),

    /// A template function was called with the wrong number of arguments
    #[error("{function} expects {expected} argument(s) but got {found}")]
    ArityMismatch {
        /// Name of the called function
        function: String,
        /// Number of arguments the function takes
        expected: usize,
        /// Number of arguments it was given
        found: usize,
    },

    /// Tried to leave the root scope
    #[error("Cannot pop the root scope")]
    ScopeUnderflow,

    /// Loading a render script failed
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    /// Reading or writing files failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// (De)serializing scope values failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn uninitialized<S: Into<String>>(key: S) -> Self {
        Self::UninitializedState {
            key: key.into(),
        }
    }

    pub(crate) fn malformed<K: Into<String>, R: Into<String>>(key: K, reason: R) -> Self {
        Self::MalformedState {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
