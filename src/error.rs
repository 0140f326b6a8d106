//! Error types for drivertab operations.
//!
//! This module defines [`DrivertabError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DrivertabError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DrivertabError::Other`) for unexpected errors
//! - No error is recovered or retried; the tool either completes the full
//!   scan-and-render or aborts

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for drivertab operations.
#[derive(Debug, Error)]
pub enum DrivertabError {
    /// A devices directory or catalog subdirectory could not be listed.
    #[error("Failed to list driver directory {dir}: {source}")]
    Scan {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for drivertab operations.
pub type Result<T> = std::result::Result<T, DrivertabError>;
