//! # Loan Lifecycle
//!
//! The only two operations that mutate patron and catalogue state.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Loan State Machine                            │
//! │                                                                     │
//! │          process_loan                    process_return             │
//! │  (no loan) ───────────► (active loan) ───────────► (no loan)        │
//! │      │   eligible?           │        loan found?      │            │
//! │      │                       │                         │            │
//! │      └── false: NOTHING      └── false: NOTHING ───────┘            │
//! │          CHANGES                 CHANGES                            │
//! │                                                                     │
//! │  On success, exactly two records move together:                     │
//! │    patron.loans        gains/loses one Loan                         │
//! │    item.on_loan        +1 / -1                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## All-or-Nothing
//! Both operations decide first and mutate after. A refused request leaves
//! both records untouched, which is what lets the menu screens simply
//! re-prompt on `false` with no rollback step.

use chrono::{Days, NaiveDate};

use crate::rules::can_borrow;
use crate::types::{BorrowableItem, Loan, Patron};

/// Loans an item to a patron for `loan_days` days.
///
/// Consults [`can_borrow`] with the patron's age, fee balance and training
/// record. On success a [`Loan`] due `today + loan_days` is appended to the
/// patron and the item's on-loan counter is incremented; on refusal nothing
/// is mutated.
///
/// `today` is supplied by the caller so the core never reads the clock.
///
/// ## Example
/// ```rust
/// use bat_core::loans::process_loan;
/// use bat_core::types::{BorrowableItem, ItemKind, Patron};
/// use chrono::NaiveDate;
///
/// let mut patron = Patron::new(1, "Hannah Taylor", 70);
/// let mut item = BorrowableItem {
///     id: 101,
///     name: "Novel".into(),
///     kind: ItemKind::Book,
///     year: 2020,
///     number_owned: 2,
///     on_loan: 0,
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 10, 13).unwrap();
///
/// assert!(process_loan(&mut patron, &mut item, 7, today));
/// assert_eq!(item.on_loan, 1);
/// assert_eq!(
///     patron.loans[0].due_date,
///     NaiveDate::from_ymd_opt(2024, 10, 20).unwrap()
/// );
/// ```
pub fn process_loan(
    patron: &mut Patron,
    item: &mut BorrowableItem,
    loan_days: i64,
    today: NaiveDate,
) -> bool {
    let eligible = can_borrow(
        &item.kind,
        patron.age,
        loan_days,
        patron.outstanding_fees,
        patron.gardening_tool_training,
        patron.carpentry_tool_training,
    );
    if !eligible {
        return false;
    }

    // Eligibility guarantees 1 <= loan_days <= the category cap.
    let due_date = today
        .checked_add_days(Days::new(loan_days as u64))
        .unwrap_or(NaiveDate::MAX);

    patron.loans.push(Loan::for_item(item, due_date));
    item.on_loan += 1;
    true
}

/// Returns a previously loaned item.
///
/// Locates the patron's active loan for this item; if found, removes it and
/// decrements the item's on-loan counter. `false` (and no mutation) when
/// the patron has no such loan.
pub fn process_return(patron: &mut Patron, item: &mut BorrowableItem) -> bool {
    let Some(position) = patron.loans.iter().position(|loan| loan.item_id == item.id) else {
        return false;
    };

    patron.loans.remove(position);
    item.on_loan = item.on_loan.saturating_sub(1);
    true
}

// =============================================================================
// Unit Tests
// =============================================================================
