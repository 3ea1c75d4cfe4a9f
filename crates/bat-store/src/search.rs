//! # Search
//!
//! Lookup functions over the loaded collections.
//!
//! ## Design
//! Free functions over slices rather than methods on [`crate::Library`]:
//! the screens sometimes search a filtered subset, and the tests can run
//! against a plain `Vec` fixture without touching a file.
//!
//! Name matching is exact after trimming. With a register this size there
//! is no need for indexes or fuzzy matching; a linear scan is instant.

use bat_core::{BorrowableItem, Patron};

/// All patrons with exactly this name.
pub fn patrons_by_name<'a>(name: &str, patrons: &'a [Patron]) -> Vec<&'a Patron> {
    let name = name.trim();
    patrons.iter().filter(|p| p.name == name).collect()
}

/// All patrons of exactly this age.
pub fn patrons_by_age(age: i64, patrons: &[Patron]) -> Vec<&Patron> {
    patrons.iter().filter(|p| p.age == age).collect()
}

/// The first patron matching both name and age, if any.
///
/// Name alone is ambiguous (two patrons may share a name); name plus age
/// is how the counter screens identify a specific person.
pub fn patron_by_name_and_age<'a>(name: &str, age: i64, patrons: &'a [Patron]) -> Option<&'a Patron> {
    let name = name.trim();
    patrons.iter().find(|p| p.name == name && p.age == age)
}

/// The catalogue item with this id, if any.
pub fn item_by_id(id: u32, catalogue: &[BorrowableItem]) -> Option<&BorrowableItem> {
    catalogue.iter().find(|item| item.id == id)
}

// =============================================================================
// Unit Tests
// =============================================================================
