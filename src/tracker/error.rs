//! Tracker errors
//!
//! Lifecycle calls on the tracker never surface these; they are used by
//! configuration validation and trace loading.

use thiserror::Error;

/// Errors that can occur while configuring or feeding a tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
