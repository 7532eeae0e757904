//! # Store Error Types
//!
//! Error types for catalog file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path and the direction            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Console prints the message and keeps running                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Per-record problems inside a file are NOT StoreErrors. They end up in the
//! [`arcade_core::ImportReport`] and the import carries on.

use std::fmt::Display;
use std::path::Path;

use arcade_core::CoreError;
use thiserror::Error;

/// Catalog file errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The whole import was aborted.
    ///
    /// ## When This Occurs
    /// - File doesn't exist or can't be read
    /// - Content is not valid JSON
    /// - Top-level value is not an array
    #[error("Failed to import catalog from {path}: {reason}")]
    ImportFailed { path: String, reason: String },

    /// The export could not be written.
    ///
    /// ## When This Occurs
    /// - Directory doesn't exist or isn't writable
    /// - Disk full
    #[error("Failed to export catalog to {path}: {reason}")]
    ExportFailed { path: String, reason: String },

    /// Domain error while seeding.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates an ImportFailed error.
    pub fn import_failed(path: impl AsRef<Path>, reason: impl Display) -> Self {
        StoreError::ImportFailed {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an ExportFailed error.
    pub fn export_failed(path: impl AsRef<Path>, reason: impl Display) -> Self {
        StoreError::ExportFailed {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
