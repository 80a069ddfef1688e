//! Error types for Libris
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using LibrisError
pub type Result<T> = std::result::Result<T, LibrisError>;

/// Unified error type for Libris operations
#[derive(Debug, Error)]
pub enum LibrisError {
    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("Book with ISBN {0} already exists")]
    AlreadyExists(String),

    #[error("Book with ISBN {0} is not found")]
    NotFound(String),

    /// Update attempted to move a book to a different ISBN
    #[error("ISBN in body ({body}) does not match ISBN in path ({path})")]
    KeyMismatch { path: String, body: String },

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("Invalid request body: {0}")]
    MalformedInput(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
