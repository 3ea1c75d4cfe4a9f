//! # Validation Module
//!
//! Input validation for patron registration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Terminal prompts                                          │
//! │  ├── Format checks (is it a number at all?)                         │
//! │  └── Re-prompt until parseable                                      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Business rule validation (name present, age classifiable)      │
//! │  └── Typed errors, shown once, no retry loop                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: The register itself                                       │
//! │  └── Sequential ids assigned by bat-store, never user input         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_PATRON_AGE, MIN_PATRON_AGE, PATRON_NAME_MAX};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a patron name for registration.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`PATRON_NAME_MAX`] characters
///
/// ## Example
/// ```rust
/// use bat_core::validation::validate_patron_name;
///
/// assert!(validate_patron_name("Hannah Taylor").is_ok());
/// assert!(validate_patron_name("   ").is_err());
/// ```
pub fn validate_patron_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > PATRON_NAME_MAX {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: PATRON_NAME_MAX,
        });
    }

    Ok(())
}

/// Validates a patron age for registration.
///
/// ## Rules
/// - Must fall inside the classifiable domain `1..=199`
pub fn validate_patron_age(age: i64) -> ValidationResult<()> {
    if !(MIN_PATRON_AGE..=MAX_PATRON_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: MIN_PATRON_AGE,
            max: MAX_PATRON_AGE,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
