//! # Domain Types
//!
//! Core domain types used throughout BAT.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐       │
//! │  │     Patron     │   │ BorrowableItem │   │      Loan      │       │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │       │
//! │  │  id            │   │  id            │   │  item_id (ref) │       │
//! │  │  name, age     │   │  name, kind    │   │  item snapshot │       │
//! │  │  fees (Money)  │   │  year          │   │  due_date      │       │
//! │  │  trainings ×3  │   │  number_owned  │   └────────────────┘       │
//! │  │  loans []      │   │  on_loan       │                            │
//! │  └────────────────┘   └────────────────┘                            │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐                            │
//! │  │   PatronKind   │   │    ItemKind    │                            │
//! │  │  ────────────  │   │  ────────────  │                            │
//! │  │  Minor         │   │  Book          │                            │
//! │  │  Adult         │   │  GardeningTool │                            │
//! │  │  Elderly       │   │  CarpentryTool │                            │
//! │  └────────────────┘   │  Unknown(..)   │                            │
//! │                       └────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Item Taxonomy
//! The catalogue file stores item types as free strings ("Book",
//! "Gardening tool", ...). Those are resolved into [`ItemKind`] once, at
//! deserialization, so the eligibility rules dispatch over a finite enum
//! instead of comparing strings. Unrecognised labels survive round-trips
//! via [`ItemKind::Unknown`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::{BOOK_LOAN_DAYS_MAX, CARPENTRY_LOAN_DAYS_MAX, GARDENING_LOAN_DAYS_MAX};

// =============================================================================
// Patron Kind
// =============================================================================

/// Age bracket a patron falls into.
///
/// Produced only by [`crate::rules::classify_patron`]; an out-of-domain age
/// is an error, not a fourth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatronKind {
    /// Ages 1-17.
    Minor,
    /// Ages 18-89.
    Adult,
    /// Ages 90 and up.
    Elderly,
}

impl fmt::Display for PatronKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PatronKind::Minor => "Minor",
            PatronKind::Adult => "Adult",
            PatronKind::Elderly => "Elderly",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Item Kind
// =============================================================================

/// Category of a borrowable item.
///
/// ## Serialization
/// Stored in the catalogue file as the original display strings, so the
/// data files stay readable:
/// `"Book"`, `"Gardening tool"`, `"Carpentry tool"`.
/// Any other label deserializes to `Unknown` and is written back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    Book,
    GardeningTool,
    CarpentryTool,
    /// Unrecognised category label, preserved as-is.
    Unknown(String),
}

impl ItemKind {
    /// The catalogue label for this kind.
    pub fn label(&self) -> &str {
        match self {
            ItemKind::Book => "Book",
            ItemKind::GardeningTool => "Gardening tool",
            ItemKind::CarpentryTool => "Carpentry tool",
            ItemKind::Unknown(label) => label,
        }
    }

    /// The longest permitted loan for this kind, in days.
    ///
    /// `None` for unknown categories, which cannot be loaned at all.
    pub fn max_loan_days(&self) -> Option<i64> {
        match self {
            ItemKind::Book => Some(BOOK_LOAN_DAYS_MAX),
            ItemKind::GardeningTool => Some(GARDENING_LOAN_DAYS_MAX),
            ItemKind::CarpentryTool => Some(CARPENTRY_LOAN_DAYS_MAX),
            ItemKind::Unknown(_) => None,
        }
    }
}

impl From<String> for ItemKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Book" => ItemKind::Book,
            "Gardening tool" => ItemKind::GardeningTool,
            "Carpentry tool" => ItemKind::CarpentryTool,
            _ => ItemKind::Unknown(label),
        }
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        kind.label().to_string()
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Borrowable Item
// =============================================================================

/// A catalogue entry: a title or tool with a finite number of copies.
///
/// ## Invariants
/// - `on_loan <= number_owned` for any well-seeded catalogue
/// - `on_loan` only changes through [`crate::loans`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowableItem {
    /// Unique catalogue identifier.
    #[serde(rename = "item_id")]
    pub id: u32,

    /// Display name shown in search results and loan summaries.
    #[serde(rename = "item_name")]
    pub name: String,

    /// Category, resolved from the catalogue label.
    #[serde(rename = "item_type")]
    pub kind: ItemKind,

    /// Publication or acquisition year.
    pub year: i32,

    /// Total copies the library owns.
    pub number_owned: u32,

    /// Copies currently out on loan.
    pub on_loan: u32,
}

impl BorrowableItem {
    /// Copies currently on the shelf.
    pub fn copies_available(&self) -> u32 {
        self.number_owned.saturating_sub(self.on_loan)
    }
}

impl fmt::Display for BorrowableItem {
    /// One-line summary, e.g. `Item 101: Dictionary (Book)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item {}: {} ({})", self.id, self.name, self.kind)
    }
}

// =============================================================================
// Loan
// =============================================================================

/// An active borrowing relationship between one patron and one item copy.
///
/// ## Snapshot Pattern
/// A loan references the item by id but also freezes the item's name and
/// kind at borrow time, so a patron record prints meaningfully without a
/// catalogue lookup (and stays correct if the catalogue entry is renamed).
///
/// Created only by [`crate::loans::process_loan`]; removed only by
/// [`crate::loans::process_return`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Catalogue id of the borrowed item.
    pub item_id: u32,

    /// Item name at time of borrowing (frozen).
    pub item_name: String,

    /// Item kind at time of borrowing (frozen).
    pub item_kind: ItemKind,

    /// Date the item is due back.
    pub due_date: NaiveDate,
}

impl Loan {
    /// Creates a loan for an item, freezing its name and kind.
    pub fn for_item(item: &BorrowableItem, due_date: NaiveDate) -> Self {
        Loan {
            item_id: item.id,
            item_name: item.name.clone(),
            item_kind: item.kind.clone(),
            due_date,
        }
    }
}

impl fmt::Display for Loan {
    /// E.g. `Item 101: Dictionary (Book); due 20/10/2024`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item {}: {} ({}); due {}",
            self.item_id,
            self.item_name,
            self.item_kind,
            self.due_date.format("%d/%m/%Y")
        )
    }
}

// =============================================================================
// Patron
// =============================================================================

/// A registered member of the library and makerspace.
///
/// ## Identity
/// `id` is assigned sequentially at registration and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    /// Unique register identifier, immutable after creation.
    pub id: u32,

    /// Full name as registered.
    pub name: String,

    /// Age in whole years.
    pub age: i64,

    /// Outstanding fee balance in cents. Any positive balance blocks
    /// borrowing and makerspace access.
    pub outstanding_fees: Money,

    /// Completed the gardening tool safety course.
    pub gardening_tool_training: bool,

    /// Completed the carpentry tool safety course.
    pub carpentry_tool_training: bool,

    /// Completed the makerspace induction.
    pub makerspace_training: bool,

    /// Active loans, oldest first.
    #[serde(default)]
    pub loans: Vec<Loan>,
}

impl Patron {
    /// Creates a freshly registered patron: no fees, no trainings, no loans.
    pub fn new(id: u32, name: impl Into<String>, age: i64) -> Self {
        Patron {
            id,
            name: name.into(),
            age,
            outstanding_fees: Money::zero(),
            gardening_tool_training: false,
            carpentry_tool_training: false,
            makerspace_training: false,
            loans: Vec::new(),
        }
    }

    /// Finds the active loan for an item, if any.
    pub fn find_loan(&self, item_id: u32) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.item_id == item_id)
    }
}

impl fmt::Display for Patron {
    /// Multi-line summary used by the search and return screens.
    ///
    /// ```text
    /// Patron 101: Er Jun Yet (aged 20)
    /// Outstanding fees: $0.00
    /// Completed training:
    ///  - gardening tools
    ///  - carpentry tools
    ///  - makerspace
    /// 1 active loan:
    ///  - Item 101: Dictionary (Book); due 20/10/2024
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Patron {}: {} (aged {})", self.id, self.name, self.age)?;
        writeln!(f, "Outstanding fees: {}", self.outstanding_fees)?;

        let trainings: Vec<&str> = [
            (self.gardening_tool_training, "gardening tools"),
            (self.carpentry_tool_training, "carpentry tools"),
            (self.makerspace_training, "makerspace"),
        ]
        .iter()
        .filter(|(done, _)| *done)
        .map(|(_, label)| *label)
        .collect();

        if trainings.is_empty() {
            writeln!(f, "Completed training: none")?;
        } else {
            writeln!(f, "Completed training:")?;
            for label in trainings {
                writeln!(f, " - {label}")?;
            }
        }

        match self.loans.len() {
            0 => write!(f, "No active loans")?,
            1 => write!(f, "1 active loan:")?,
            n => write!(f, "{n} active loans:")?,
        }
        for loan in &self.loans {
            write!(f, "\n - {loan}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> BorrowableItem {
        BorrowableItem {
            id: 101,
            name: "Dictionary".to_string(),
            kind: ItemKind::Book,
            year: 2020,
            number_owned: 3,
            on_loan: 1,
        }
    }

    #[test]
    fn test_item_kind_from_label() {
        assert_eq!(ItemKind::from("Book".to_string()), ItemKind::Book);
        assert_eq!(
            ItemKind::from("Gardening tool".to_string()),
            ItemKind::GardeningTool
        );
        assert_eq!(
            ItemKind::from("Carpentry tool".to_string()),
            ItemKind::CarpentryTool
        );
        assert_eq!(
            ItemKind::from("Car".to_string()),
            ItemKind::Unknown("Car".to_string())
        );
    }

    #[test]
    fn test_item_kind_unknown_round_trips_label() {
        let kind = ItemKind::from("Power drill".to_string());
        assert_eq!(String::from(kind), "Power drill");
    }

    #[test]
    fn test_item_serde_uses_catalogue_field_names() {
        let item = dictionary();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["item_id"], 101);
        assert_eq!(json["item_name"], "Dictionary");
        assert_eq!(json["item_type"], "Book");
        assert_eq!(json["number_owned"], 3);
        assert_eq!(json["on_loan"], 1);

        let back: BorrowableItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_copies_available() {
        let item = dictionary();
        assert_eq!(item.copies_available(), 2);
    }

    #[test]
    fn test_find_loan() {
        let mut patron = Patron::new(101, "Er Jun Yet", 20);
        let due = NaiveDate::from_ymd_opt(2024, 10, 20).unwrap();
        patron.loans.push(Loan::for_item(&dictionary(), due));

        assert_eq!(patron.find_loan(101).unwrap().item_id, 101);
        assert!(patron.find_loan(1000).is_none());
    }

    #[test]
    fn test_patron_display() {
        let mut patron = Patron::new(101, "Er Jun Yet", 20);
        patron.gardening_tool_training = true;
        patron.carpentry_tool_training = true;
        patron.makerspace_training = true;

        let due = NaiveDate::from_ymd_opt(2024, 10, 20).unwrap();
        patron.loans.push(Loan::for_item(&dictionary(), due));

        let expected = "Patron 101: Er Jun Yet (aged 20)\n\
                        Outstanding fees: $0.00\n\
                        Completed training:\n\
                        \x20- gardening tools\n\
                        \x20- carpentry tools\n\
                        \x20- makerspace\n\
                        1 active loan:\n\
                        \x20- Item 101: Dictionary (Book); due 20/10/2024";
        assert_eq!(patron.to_string(), expected);
    }

    #[test]
    fn test_patron_display_without_training_or_loans() {
        let patron = Patron::new(7, "Leon Kelly", 15);
        let rendered = patron.to_string();
        assert!(rendered.contains("Completed training: none"));
        assert!(rendered.ends_with("No active loans"));
    }
}
