//! Error handling module for drillbook
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Every drill reports bad input through these types; the binary turns them
//! into a message on stderr and a non-zero exit code.

use thiserror::Error;

use crate::projects::arithmetic::ArrangeError;

/// Main error type for drillbook
#[derive(Error, Debug)]
pub enum DrillError {
    /// IO errors (ledger files, config files, stdin/stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (out-of-range values, unsatisfiable constraints)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed textual input (times, puzzles, card numbers)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A search finished without finding a solution
    #[error("Unsolvable: {0}")]
    Unsolvable(String),

    /// A referenced item (graph node, weekday, color) does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Arithmetic formatter errors keep their legacy wording
    #[error(transparent)]
    Arrange(#[from] ArrangeError),
}

/// Result type alias for drillbook operations
pub type Result<T> = std::result::Result<T, DrillError>;

// Convenient error constructors
impl DrillError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an unsolvable error
    pub fn unsolvable(msg: impl Into<String>) -> Self {
        Self::Unsolvable(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
