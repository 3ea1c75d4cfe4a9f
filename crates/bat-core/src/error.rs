//! # Error Types
//!
//! Domain-specific error types for bat-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  bat-core errors (this file)                                        │
//! │  ├── CoreError        - Domain faults (impossible age)              │
//! │  └── ValidationError  - Registration input failures                 │
//! │                                                                     │
//! │  bat-store errors (separate crate)                                  │
//! │  └── StoreError       - File load/save failures                     │
//! │                                                                     │
//! │  NOT errors: an ineligible borrow request, a denied makerspace      │
//! │  visit, or a return with no matching loan. Those are ordinary       │
//! │  business outcomes and stay `bool`.                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending age, field name)
//! 3. Errors are enum variants, never String
//! 4. No sentinel values: where the legacy data model used an `"ERROR"`
//!    string alongside real categories, callers here get an `Err` branch
//!    they cannot confuse with a category

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business rule errors.
///
/// These represent domain faults, not business outcomes. A classifier that
/// is handed an impossible age has nothing sensible to return; an eligible
/// patron being refused a tool does (that is `false`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Age is outside the recognised domain.
    ///
    /// ## When This Occurs
    /// - Age below [`crate::MIN_PATRON_AGE`] (zero or negative)
    /// - Age above [`crate::MAX_PATRON_AGE`]
    #[error("Age {age} is outside the valid range")]
    InvalidAge { age: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Registration input validation errors.
///
/// These occur when user input doesn't meet requirements.
/// Used for early validation before a patron record is created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
