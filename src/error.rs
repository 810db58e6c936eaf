//! Error types and handling infrastructure for fresheye.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling in the binary.
//!
//! End-of-input on the console is not an error: the key reader reports it as a
//! regular outcome. Only genuine I/O failures and bad configuration surface here.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for fresheye operations.
#[derive(Error, Debug)]
pub enum FreshEyeError {
    /// Console or file I/O failed
    #[error("I/O operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file named on the command line does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Codepage name not in the supported list
    #[error("Unknown codepage: {name} (expected one of koi8-r, cp866, cp1251, mac, iso8859-5)")]
    UnknownCodepage { name: String },

    /// Configuration value out of range or config file unreadable
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments or key set description
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for fresheye operations.
pub type Result<T> = std::result::Result<T, FreshEyeError>;

impl FreshEyeError {
    /// Create an Io error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn unknown_codepage(name: impl Into<String>) -> Self {
        Self::UnknownCodepage { name: name.into() }
    }
}

impl From<std::io::Error> for FreshEyeError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            std::io::ErrorKind::InvalidData => "Invalid data in stream",
            _ => "IO operation failed",
        };
        Self::Io {
            message: message.to_string(),
            source: err,
        }
    }
}
