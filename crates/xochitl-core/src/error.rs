//! Error types and exit codes for the xochitl tools
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, malformed metadata)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, malformed metadata (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while reading or mutating the metadata store
#[derive(Error, Debug)]
pub enum XochitlError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data/store errors (exit code 3)
    #[error("store not found: {path:?} is not a directory")]
    StoreNotFound { path: PathBuf },

    #[error("malformed metadata in {path:?}: {reason}")]
    MalformedRecord { path: PathBuf, reason: String },

    #[error("ancestor '{id}' has no metadata file (resolved below it: {partial})")]
    MissingAncestor { id: String, partial: String },

    #[error("ancestor '{id}' is malformed: {reason} (resolved below it: {partial})")]
    MalformedAncestor {
        id: String,
        reason: String,
        partial: String,
    },

    #[error("parent chain through '{id}' is cyclic (resolved below it: {partial})")]
    CyclicAncestry { id: String, partial: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl XochitlError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            XochitlError::UsageError(_) => ExitCode::Usage,

            XochitlError::StoreNotFound { .. }
            | XochitlError::MalformedRecord { .. }
            | XochitlError::MissingAncestor { .. }
            | XochitlError::MalformedAncestor { .. }
            | XochitlError::CyclicAncestry { .. } => ExitCode::Data,

            XochitlError::Io(_) | XochitlError::Json(_) | XochitlError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            XochitlError::UsageError(_) => "usage_error",
            XochitlError::StoreNotFound { .. } => "store_not_found",
            XochitlError::MalformedRecord { .. } => "malformed_record",
            XochitlError::MissingAncestor { .. } => "missing_ancestor",
            XochitlError::MalformedAncestor { .. } => "malformed_ancestor",
            XochitlError::CyclicAncestry { .. } => "cyclic_ancestry",
            XochitlError::Io(_) => "io_error",
            XochitlError::Json(_) => "json_error",
            XochitlError::Other(_) => "other",
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

/// Result type alias for xochitl operations
pub type Result<T> = std::result::Result<T, XochitlError>;
