//! Core error types for alfred-core.
//!
//! This module defines the error hierarchy using thiserror. Degenerate
//! selector inputs (empty catalog, missing location) are not errors and
//! never show up here.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for alfred-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Location provider errors
    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    /// Chat backend errors
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// The data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
///
/// These are precondition violations: programmer or configuration mistakes,
/// never runtime states of the selector.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Radius not in the allowed option set
    #[error("radius {value} km is not one of the allowed options {allowed:?}")]
    RadiusNotAllowed { value: u32, allowed: &'static [u32] },

    /// A size or interval that must be positive was zero
    #[error("'{field}' must be greater than zero")]
    Zero { field: &'static str },

    /// Unknown category name
    #[error("unknown category '{0}' (expected all, Comida, Actividades or Eventos)")]
    UnknownCategory(String),

    /// Unknown agenda event kind
    #[error("unknown event kind '{0}' (expected work, medical, personal or social)")]
    UnknownEventKind(String),

    /// Required text field was empty
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Time of day could not be parsed
    #[error("invalid time of day '{0}' (expected HH:MM or H:MM AM/PM)")]
    InvalidTime(String),

    /// Referenced record does not exist
    #[error("no {collection} record with id '{id}'")]
    NotFound { collection: &'static str, id: String },
}

/// Catalog-specific errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("Failed to read catalog at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the catalog file
    #[error("Failed to parse catalog at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Two entries share an identifier
    #[error("duplicate point of interest id {0}")]
    DuplicateId(u32),
}

/// Location provider errors.
///
/// The selector treats every variant as "no reference coordinate"; the
/// message is surfaced to the user unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The user denied location permission
    #[error("location permission denied")]
    PermissionDenied,

    /// The provider failed to produce a fix
    #[error("{0}")]
    Unavailable(String),
}

/// Chat backend errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Backend answered with an error status
    #[error("{status} - {message}")]
    Status { status: u16, message: String },

    /// No response was received
    #[error("no response received from the server")]
    NoResponse,

    /// Backend answered without any content
    #[error("the assistant replied without content")]
    EmptyReply,

    /// Any other failure
    #[error("{0}")]
    Other(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::Zero { field: "window_size" }.into();
        assert_eq!(
            err.to_string(),
            "Validation error: 'window_size' must be greater than zero"
        );
    }

    #[test]
    fn location_error_message_is_passed_through() {
        let err = LocationError::Unavailable("GPS timeout".into());
        assert_eq!(err.to_string(), "GPS timeout");
    }
}
