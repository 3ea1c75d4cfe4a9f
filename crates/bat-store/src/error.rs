//! # Store Error Types
//!
//! Error types for file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds the offending path                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Terminal app logs it and aborts the session; there is nothing to   │
//! │  run a library session on without its data files.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Persistence errors.
///
/// Every variant carries the file path: "couldn't parse JSON" is useless
/// to an operator without knowing which of the two files is broken.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Data file could not be read.
    ///
    /// ## When This Occurs
    /// - File missing (wrong working directory, first run without seed data)
    /// - Permission problems
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file exists but is not the expected JSON shape.
    #[error("Malformed data in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Registration input rejected by the core rules.
    #[error(transparent)]
    Validation(#[from] bat_core::ValidationError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
