//! Core error types for studyplan-core.
//!
//! This module defines the error hierarchy using thiserror for better
//! error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

use crate::schedule::TimeOfDay;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Malformed clock time string
    #[error("Invalid time format: expected zero-padded 24-hour \"HH:MM\", got \"{0}\"")]
    InvalidTimeFormat(String),

    /// Invalid time range on a schedule item
    #[error("Invalid time range for \"{item}\": end ({end}) must be greater than start ({start})")]
    InvalidTimeRange {
        item: String,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    /// Two schedule items occupy overlapping time
    #[error("Schedule items \"{first}\" and \"{second}\" overlap")]
    OverlappingItems { first: String, second: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
