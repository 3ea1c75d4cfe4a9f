//! # Application Error Type
//!
//! Unified error type for the screen loop.
//!
//! ## Error Handling Strategy
//! Business refusals (ineligible loan, unknown patron, denied makerspace
//! access) are screen messages, not errors: the screen prints a line and
//! returns to the main menu. This type only carries the failures that end
//! the session - a closed input stream or a data file that cannot be
//! read or written.

use thiserror::Error;

use bat_store::StoreError;

/// Session-ending failures.
#[derive(Debug, Error)]
pub enum AppError {
    /// The terminal went away (EOF on stdin, broken pipe on stdout).
    #[error("Terminal input/output failed: {0}")]
    Io(#[from] std::io::Error),

    /// A data file could not be loaded or saved.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for screen handlers.
pub type AppResult<T> = Result<T, AppError>;
