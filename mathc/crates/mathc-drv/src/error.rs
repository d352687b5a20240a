//! Error handling module for the mathc driver.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the driver.

use std::path::PathBuf;

use mathc_lex::LexError;
use thiserror::Error;

/// Main error type for the mathc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Error when the configuration cannot be found, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No source files were given.
    #[error("No input files provided")]
    NoInputFiles,

    /// Error when a source file cannot be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// A source file failed to tokenize.
    ///
    /// `rendered` holds the diagnostic rendered against the file text.
    #[error("{}: {source}", .path.display())]
    Lex {
        /// The file that failed.
        path: PathBuf,
        /// The lexer failure.
        source: LexError,
        /// Diagnostic with location and caret snippet.
        rendered: String,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// The text printed to stderr for this error.
    ///
    /// Lexer failures print their rendered diagnostic; everything else is a
    /// one-line `error: ...` message.
    pub fn report(&self) -> String {
        match self {
            DriverError::Lex { rendered, .. } => rendered.clone(),
            other => format!("error: {}", other),
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
