//! Error types for compare-size
//!
//! All modules use `SizeResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for compare-size operations
pub type SizeResult<T> = Result<T, SizeError>;

/// All errors that can occur in compare-size
#[derive(Error, Debug)]
pub enum SizeError {
    // Cache errors
    #[error("No size data found")]
    NoSizeData,

    // Measurement errors
    #[error("Unknown compressor: {0}")]
    UnknownCompressor(String),

    #[error("No files to compare")]
    NoFiles,

    // VCS errors
    #[error("branch not found")]
    BranchNotFound,

    #[error("not a branch tip: HEAD is shared by {0}")]
    AmbiguousBranch(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command}, stderr: {stderr}")]
    CommandExecution { command: String, stderr: String },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    User(String),
}

impl SizeError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoSizeData => Some("Run: compare-size compare"),
            Self::NoFiles => Some("Pass files to compare or set [compare].files in compare-size.toml"),
            Self::UnknownCompressor(_) => Some("Supported compressors: gz"),
            _ => None,
        }
    }
}
