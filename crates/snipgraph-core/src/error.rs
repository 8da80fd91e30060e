//! Error types and exit codes for snipgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or unreadable items source)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the snipgraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or invalid items source (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during snipgraph operations
#[derive(Error, Debug)]
pub enum SnipError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("items source not found: {path:?}")]
    SourceNotFound { path: PathBuf },

    #[error("invalid items file {path:?}: {reason}")]
    InvalidItems { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("backend command {command} failed: {reason}")]
    Backend { command: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl SnipError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SnipError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed backend command
    pub fn backend(command: &str, reason: impl std::fmt::Display) -> Self {
        SnipError::Backend {
            command: command.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SnipError::UnknownFormat(_)
            | SnipError::UsageError(_)
            | SnipError::InvalidValue { .. } => ExitCode::Usage,

            SnipError::SourceNotFound { .. } | SnipError::InvalidItems { .. } => ExitCode::Data,

            SnipError::Io(_)
            | SnipError::Json(_)
            | SnipError::Toml(_)
            | SnipError::Backend { .. }
            | SnipError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SnipError::UnknownFormat(_) => "unknown_format",
            SnipError::UsageError(_) => "usage_error",
            SnipError::InvalidValue { .. } => "invalid_value",
            SnipError::SourceNotFound { .. } => "source_not_found",
            SnipError::InvalidItems { .. } => "invalid_items",
            SnipError::Io(_) => "io_error",
            SnipError::Json(_) => "json_error",
            SnipError::Toml(_) => "toml_error",
            SnipError::Backend { .. } => "backend_error",
            SnipError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for snipgraph operations
pub type Result<T> = std::result::Result<T, SnipError>;
