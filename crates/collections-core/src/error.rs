//! Error types for histogram collections
//!
//! Provides a unified error type for all collections crates.

use thiserror::Error;

/// Core error type for collection configuration and lookup
#[derive(Error, Debug)]
pub enum Error {
    /// A dimension could not be built from the given configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Coordinate count does not match the number of dimensions
    #[error("Key resolution error: {message} (given {actual}, needed {expected})")]
    KeyResolution {
        expected: usize,
        actual: usize,
        message: String,
    },

    /// Operation is not defined for the resolved keys
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Malformed dimension specification document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a coordinate tuple of the wrong length
    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::KeyResolution {
            expected,
            actual,
            message: "Number of keys does not match no. of dimensions".to_string(),
        }
    }

    /// Create an error for a bare scalar given to a multi-dimensional collection
    pub fn scalar_for_arity(expected: usize) -> Self {
        Self::KeyResolution {
            expected,
            actual: 1,
            message: format!("Single key given when {expected} needed"),
        }
    }

    /// Create an error for a read that fans out to several histograms
    pub fn multi_match(operation: &str, matches: usize) -> Self {
        Self::UnsupportedOperation(format!(
            "{operation} not implemented for multi-match reads ({matches} keys resolved)"
        ))
    }

    /// Create an error for an unusable dimension configuration
    pub fn invalid_config(context: &str) -> Self {
        Self::InvalidConfiguration(context.to_string())
    }
}
