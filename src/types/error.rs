//! Unified Error Type System
//!
//! Every failure of a generator run maps onto one `HeaderGenError` variant.
//! All errors are fatal for the run: they surface at the command boundary,
//! print a message and terminate with a non-zero exit code. Rerunning is the
//! recovery path since every run regenerates its output from scratch.
//!
//! ## Error Kinds
//!
//! - **Config**: missing configuration or project layout (before any write)
//! - **Collision**: two real headers map to the same generated key (before any write)
//! - **MissingHeader**: an indexed header vanished before its redirect was written
//! - **Io / FileAccess / Walk**: filesystem failures

use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum HeaderGenError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO error with the offending path attached
    #[error("Cannot access {}: {message}", path.display())]
    FileAccess { path: PathBuf, message: String },

    #[error("Failed to walk the source tree: {0}")]
    Walk(String),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    /// Two real headers would produce the same generated key
    #[error(
        "Header file name conflict with `{key}`: {} and {}",
        first.display(),
        second.display()
    )]
    Collision {
        key: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Redirect target disappeared between scanning and writing
    #[error("Header file {} not found.", path.display())]
    MissingHeader { path: PathBuf },
}

impl HeaderGenError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn missing_header(path: impl Into<PathBuf>) -> Self {
        Self::MissingHeader { path: path.into() }
    }

    /// Path that cannot become a generated name or `#include` text
    pub fn non_utf8_path(path: impl Into<PathBuf>) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: "non UTF-8 path".to_string(),
        }
    }
}

impl From<ignore::Error> for HeaderGenError {
    fn from(err: ignore::Error) -> Self {
        HeaderGenError::Walk(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HeaderGenError>;

/// Attach the affected path to filesystem errors
pub trait ResultExt<T> {
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| HeaderGenError::FileAccess {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
