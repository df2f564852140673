//! Error types for the respell library.
//!
//! All fallible operations return [`Result`], which wraps [`RespellError`].
//! The correction engine itself is total over string inputs and never
//! fails; errors only arise in the collaborators around it (dataset I/O,
//! the HTTP server, the CLI).
//!
//! # Examples
//!
//! ```
//! use respell::error::{RespellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RespellError::config("Invalid listen address"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for respell operations.
#[derive(Error, Debug)]
pub enum RespellError {
    /// I/O errors (file operations, sockets, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dataset-related errors (parsing, missing files)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RespellError.
pub type Result<T> = std::result::Result<T, RespellError>;

impl RespellError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        RespellError::Dataset(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RespellError::Config(msg.into())
    }

    /// Create a new server error.
    pub fn server<S: Into<String>>(msg: S) -> Self {
        RespellError::Server(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RespellError::Other(msg.into())
    }
}
