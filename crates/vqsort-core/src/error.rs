//! Error types for the dispatch layer
//!
//! Provides a unified error type for all vqsort crates.

use crate::key::KernelKey;
use thiserror::Error;

/// Core error type for dispatch operations
#[derive(Error, Debug)]
pub enum Error {
    /// A dispatch point was resolved with no registered variants
    #[error("No variants registered for {0}")]
    NoVariants(KernelKey),

    /// A capability level name could not be parsed
    #[error("Unknown capability level: {0:?}")]
    UnknownLevel(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create the configuration error for an empty dispatch point
    pub fn no_variants(key: KernelKey) -> Self {
        Self::NoVariants(key)
    }

    /// Create an error for an unrecognized capability level name
    pub fn unknown_level(name: &str) -> Self {
        Self::UnknownLevel(name.to_string())
    }
}
