//! Error handling module for the ferrule CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use ferrule_ident::IdentError;
use thiserror::Error;

/// Main error type for the ferrule CLI application.
#[derive(Error, Debug)]
pub enum FerruleError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when user input is rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when recomputed hash codes disagree with a manifest.
    #[error("{count} of {total} hash codes did not match")]
    Mismatch { count: usize, total: usize },

    /// Error when an identifier cannot be constructed.
    #[error(transparent)]
    Ident(#[from] IdentError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a TOML document cannot be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using FerruleError.
pub type Result<T> = std::result::Result<T, FerruleError>;
