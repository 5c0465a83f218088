//! Error types for the faidoc-core library.
//!
//! Lookup misses (unknown template id, undetectable filename) are `Option`s
//! and field validation failures are ordinary result values; errors here are
//! reserved for configuration and file handling.

use thiserror::Error;

/// Main error type for the faidoc library.
#[derive(Error, Debug)]
pub enum FaidocError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the faidoc library.
pub type Result<T> = std::result::Result<T, FaidocError>;
