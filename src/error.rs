//! Error types for fallible I/O at the edges of the engine
//!
//! The game and tag operations themselves never fail; only loading word
//! lists, content, configuration and fetching words can.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A word failed validation
    #[error("Invalid word: {0}")]
    Word(#[from] WordError),

    /// The word source request failed (transport or non-success status)
    #[error("Word source request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    /// The word source answered with an unusable payload
    #[error("Malformed word payload: {0}")]
    Payload(String),

    /// A word list had nothing to pick from
    #[error("Word list is empty")]
    EmptyWordList,

    /// An explicitly named config file does not exist
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
