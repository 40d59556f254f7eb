//! Error types for the documentation test helpers
//!
//! Block and ordering errors carry fixed messages: a failing test points at the
//! helper that failed, and the caller already knows which marker it asked for.
//! The structured fields are there for code that wants to branch on them.

use thiserror::Error;

/// A block's start marker is missing from the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("Class is not found in contents")]
    ClassNotFound { class_name: String },
    #[error("Method is not found in contents")]
    MethodNotFound { method_name: String },
    #[error("There is no request syntax section")]
    MissingRequestSyntax,
    #[error("There is no response syntax section")]
    MissingResponseSyntax,
    #[error("There is no response structure")]
    MissingResponseStructure,
    #[error("Param is not found in contents")]
    ParamNotFound { param_name: String },
}

/// An expected line was not found after the previous line's match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lines are not found in order in contents")]
pub struct LineOrderError {
    /// Position of the first missing line in the expected sequence.
    pub index: usize,
}

/// Failures while creating, reading or removing a fixture directory.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("file is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FixtureError {
    /// True when the underlying I/O error is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FixtureError::Io(err) if err.kind() == std::io::ErrorKind::NotFound)
    }
}
