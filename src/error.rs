//! Error types for architecture analysis
//!
//! Only boundary problems (a malformed catalog, a bad configuration file,
//! a missing input) surface as errors. Per-file read and parse failures are
//! absorbed by the engines and simply reduce coverage.

use std::process::ExitCode;

use thiserror::Error;

/// Errors that can abort an analysis run
#[derive(Debug, Error)]
pub enum ArchError {
    /// An input file or directory does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// The component catalog failed structural validation
    #[error("invalid component catalog: {message}")]
    InvalidCatalog { message: String },

    /// The analysis configuration is unreadable or out of range
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArchError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(2),
            Self::InvalidCatalog { .. } => ExitCode::from(3),
            Self::InvalidConfig { .. } => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(5),
            Self::Json(_) => ExitCode::from(6),
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ArchError>;
