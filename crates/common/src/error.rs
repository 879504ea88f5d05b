//! Common error types for ocprobe.

use thiserror::Error;

/// Common error type for ocprobe operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required bundle marker (directory or config file) is absent.
    #[error("{0} not found")]
    MissingPrerequisite(String),

    #[error("Malformed config document: {0}")]
    MalformedDocument(String),

    #[error("{collection} entry #{index} is missing required field `{field}`")]
    MissingField {
        collection: String,
        index: usize,
        field: String,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a field that is present but carries the wrong plist type.
    pub fn field_type(collection: &str, index: usize, field: &str, expected: &str) -> Self {
        Error::MalformedDocument(format!(
            "{collection} entry #{index}: field `{field}` must be a {expected}"
        ))
    }

    /// Whether this error stems from the bundle itself rather than the host.
    pub fn is_bundle_error(&self) -> bool {
        matches!(
            self,
            Error::MissingPrerequisite(_) | Error::MalformedDocument(_) | Error::MissingField { .. }
        )
    }
}

/// Result type alias using common Error.
pub type Result<T> = std::result::Result<T, Error>;
