//! # Money Module
//!
//! Provides the `Money` type for fee balances.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  With floats:                                                       │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A patron whose fee balance is "0.000000001" would be refused       │
//! │  every loan in the building, and nobody could see why.              │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    A balance is exactly zero or it is not. The fee gate in the      │
//! │    eligibility rules becomes a plain integer comparison.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bat_core::money::Money;
//!
//! // Create from cents (preferred)
//! let fine = Money::from_cents(250); // $2.50
//!
//! let balance = fine + Money::from_cents(100); // $3.50
//! assert!(balance.is_owing());
//! assert_eq!(balance.to_string(), "$3.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for credits and waivers
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, so fee balances serialize as a plain
///   integer in the patron register
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bat_core::money::Money;
    ///
    /// let fine = Money::from_cents(250); // Represents $2.50
    /// assert_eq!(fine.cents(), 250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use bat_core::money::Money;
    ///
    /// let fine = Money::from_major_minor(2, 50); // $2.50
    /// assert_eq!(fine.cents(), 250);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero balance.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the amount is exactly zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the amount is a positive outstanding balance.
    ///
    /// This is the fee gate used by every borrowing rule: a patron owes
    /// money exactly when this returns `true`.
    #[inline]
    pub const fn is_owing(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Money {
    /// Formats as a currency string, e.g. `$2.50` or `-$5.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = (self.0 / 100).abs();
        let frac = (self.0 % 100).abs();
        write!(f, "{sign}${whole}.{frac:02}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
