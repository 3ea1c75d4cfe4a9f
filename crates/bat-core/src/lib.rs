//! # bat-core: Pure Business Rules for BAT
//!
//! This crate is the **heart** of BAT (Books And Tools), a combined lending
//! library and community makerspace. It contains every business decision as a
//! pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          BAT Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  apps/terminal (menu UI)                      │  │
//! │  │   Loan ──► Return ──► Search ──► Register ──► Makerspace      │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                 ★ bat-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌────────────┐      │  │
//! │  │   │  types  │  │  rules  │  │  loans  │  │ validation │      │  │
//! │  │   │ Patron  │  │ classify│  │ process │  │ name / age │      │  │
//! │  │   │  Item   │  │ borrow  │  │ return  │  │   checks   │      │  │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └────────────┘      │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO CLOCK • NO FILES • PURE FUNCTIONS               │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                  bat-store (persistence)                      │  │
//! │  │          JSON patron register + item catalogue                │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Patron, BorrowableItem, Loan, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rules`] - Classification, discounts, eligibility decisions
//! - [`loans`] - The borrow/return lifecycle
//! - [`validation`] - Registration input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every decision is deterministic - same input,
//!    same outcome. `process_loan` takes today's date as an argument
//!    instead of reading the clock.
//! 2. **Booleans Are Outcomes, Not Errors**: an ineligible borrow request
//!    is `false`, never an `Err`. Errors are reserved for domain faults
//!    such as an impossible age.
//! 3. **Integer Money**: fee balances are cents (i64), never floats.
//!
//! ## Example Usage
//!
//! ```rust
//! use bat_core::money::Money;
//! use bat_core::rules::{can_borrow, classify_patron};
//! use bat_core::types::{ItemKind, PatronKind};
//!
//! // A 70-year-old with no fees may borrow a book for a week.
//! assert_eq!(classify_patron(70).unwrap(), PatronKind::Adult);
//! assert!(can_borrow(&ItemKind::Book, 70, 7, Money::zero(), false, false));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loans;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bat_core::Money` instead of
// `use bat_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Youngest age the system recognises.
///
/// ## Business Reason
/// Infants are registered under a guardian; an age below one year is a data
/// entry mistake, not a patron.
pub const MIN_PATRON_AGE: i64 = 1;

/// Oldest age the system recognises.
///
/// ## Business Reason
/// Anything above this is a typo (e.g. entering a birth year as an age).
pub const MAX_PATRON_AGE: i64 = 199;

/// Longest book loan, in days.
pub const BOOK_LOAN_DAYS_MAX: i64 = 55;

/// Longest gardening tool loan, in days.
pub const GARDENING_LOAN_DAYS_MAX: i64 = 28;

/// Longest carpentry tool loan, in days.
pub const CARPENTRY_LOAN_DAYS_MAX: i64 = 14;

/// Maximum registered patron name length, in characters.
pub const PATRON_NAME_MAX: usize = 100;
