//! Error handling for Layerkit
//!
//! Document mutations never fail: unmet preconditions degrade to no-ops.
//! The types here cover the boundaries that can fail:
//! - Document errors (snapshot encoding/decoding and validation)
//! - Generic I/O and free-form errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Document error type
///
/// Represents failures while encoding, decoding or validating a persisted
/// document snapshot.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Snapshot could not be encoded as JSON
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Snapshot could not be decoded from JSON
    #[error("Failed to deserialize document: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The same layer id appears more than once in the layer tree
    #[error("Duplicate layer id: {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// Canvas dimensions are not positive finite numbers
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
}

/// Main error type for Layerkit
#[derive(Error, Debug)]
pub enum Error {
    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type for Layerkit operations
pub type Result<T> = std::result::Result<T, Error>;
