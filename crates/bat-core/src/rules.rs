//! # Business Rules
//!
//! The decision functions at the centre of BAT: patron classification,
//! age-based discounts, borrowing eligibility and makerspace access.
//!
//! ## Decision Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Borrowing a Tool or Book                        │
//! │                                                                     │
//! │  can_borrow(kind, age, days, fees, trainings)                       │
//! │       │                                                             │
//! │       ├── fees owing? ──────────────► false (gate dominates all)    │
//! │       │                                                             │
//! │       ├── classify_patron(age) ─ Err ► false                        │
//! │       │                                                             │
//! │       └── dispatch on kind:                                         │
//! │             Book ──────── any patron, days 1..=55                   │
//! │             Gardening ─── trained, not Elderly, days 1..=28         │
//! │             Carpentry ─── trained, Adult only, days 1..=14          │
//! │             Unknown ───── false                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure and total over its declared domain; the only
//! error branch is an age outside `1..=199`, and refusals are plain `false`.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ItemKind, PatronKind};
use crate::{MAX_PATRON_AGE, MIN_PATRON_AGE};

// =============================================================================
// Patron Classification
// =============================================================================

/// Classifies a patron by age.
///
/// ## Brackets
/// - `1..=17` → [`PatronKind::Minor`]
/// - `18..=89` → [`PatronKind::Adult`]
/// - `90..=199` → [`PatronKind::Elderly`]
/// - anything else → [`CoreError::InvalidAge`]
///
/// ## Example
/// ```rust
/// use bat_core::rules::classify_patron;
/// use bat_core::types::PatronKind;
///
/// assert_eq!(classify_patron(17).unwrap(), PatronKind::Minor);
/// assert_eq!(classify_patron(18).unwrap(), PatronKind::Adult);
/// assert!(classify_patron(200).is_err());
/// ```
pub fn classify_patron(age: i64) -> CoreResult<PatronKind> {
    if !(MIN_PATRON_AGE..=MAX_PATRON_AGE).contains(&age) {
        return Err(CoreError::InvalidAge { age });
    }

    Ok(match age {
        1..=17 => PatronKind::Minor,
        18..=89 => PatronKind::Adult,
        _ => PatronKind::Elderly,
    })
}

// =============================================================================
// Discounts
// =============================================================================

/// Membership fee discount for a patron of the given age, in percent.
///
/// ## Brackets
/// - `1..=50` → 0
/// - `51..=64` → 10
/// - `65..=89` → 15
/// - `90..` → 100
///
/// Age 50 sits on a disputed boundary in the historical rule set; this
/// implementation pins it to the 0% bracket, consistent with 51 being the
/// first discounted age.
///
/// Zero and negative ages are invalid. The upper age bound is deliberately
/// not enforced here: the discount schedule is open-ended above 90.
pub fn age_discount(age: i64) -> CoreResult<u8> {
    if age <= 0 {
        return Err(CoreError::InvalidAge { age });
    }

    Ok(match age {
        1..=50 => 0,
        51..=64 => 10,
        65..=89 => 15,
        _ => 100,
    })
}

// =============================================================================
// Borrowing Eligibility
// =============================================================================

/// Decides whether a patron may borrow an item of the given kind.
///
/// All conditions must hold; any failure is `false`, never an error:
/// 1. No outstanding fees (the fee gate dominates everything else).
/// 2. The age must classify (an unclassifiable age never borrows).
/// 3. Per-kind policy:
///    - **Book**: any classified patron; loan length within the book cap.
///    - **Gardening tool**: gardening training required; Elderly patrons
///      are ineligible (Minors with training are fine); gardening cap.
///    - **Carpentry tool**: carpentry training required; Adults only;
///      carpentry cap.
///    - **Unknown**: never loanable.
///
/// ## Example
/// ```rust
/// use bat_core::money::Money;
/// use bat_core::rules::can_borrow;
/// use bat_core::types::ItemKind;
///
/// // 55 days is the longest book loan; 56 is refused.
/// assert!(can_borrow(&ItemKind::Book, 20, 55, Money::zero(), false, false));
/// assert!(!can_borrow(&ItemKind::Book, 20, 56, Money::zero(), false, false));
/// ```
pub fn can_borrow(
    kind: &ItemKind,
    patron_age: i64,
    loan_days: i64,
    outstanding_fees: Money,
    gardening_training: bool,
    carpentry_training: bool,
) -> bool {
    if outstanding_fees.is_owing() {
        return false;
    }

    let Ok(patron_kind) = classify_patron(patron_age) else {
        return false;
    };

    let Some(max_days) = kind.max_loan_days() else {
        // Unknown category: nothing to loan.
        return false;
    };
    if !(1..=max_days).contains(&loan_days) {
        return false;
    }

    match kind {
        ItemKind::Book => true,
        ItemKind::GardeningTool => gardening_training && patron_kind != PatronKind::Elderly,
        ItemKind::CarpentryTool => carpentry_training && patron_kind == PatronKind::Adult,
        ItemKind::Unknown(_) => false,
    }
}

// =============================================================================
// Makerspace Access
// =============================================================================

/// Decides whether a patron may use the makerspace.
///
/// Adults only, and only with a clear fee balance. The induction flag is
/// recorded on the patron and accepted here, but it does not gate access;
/// induction is run on the floor for first-time visitors.
pub fn can_use_makerspace(patron_age: i64, outstanding_fees: Money, makerspace_training: bool) -> bool {
    let _ = makerspace_training;

    match classify_patron(patron_age) {
        Ok(PatronKind::Adult) => !outstanding_fees.is_owing(),
        _ => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
