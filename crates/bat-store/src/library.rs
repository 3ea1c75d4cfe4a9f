//! # The Library
//!
//! The owned, in-memory form of the two data files: the patron register
//! and the item catalogue.
//!
//! ## Session Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        A BAT Session                                │
//! │                                                                     │
//! │  Library::load(config) ──► screens mutate patrons / catalogue ──►   │
//! │  library.save(config)                                               │
//! │                                                                     │
//! │  No file handle stays open between those two calls; the session     │
//! │  is single-user and the files are small.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The collections are public: this is the "explicitly passed repository"
//! that replaces the legacy system's global mutable lists. Decision logic
//! stays in `bat-core`; the Library only finds records and owns them.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use bat_core::validation::{validate_patron_age, validate_patron_name};
use bat_core::{BorrowableItem, Patron};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// The patron register and item catalogue, loaded from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    /// All registered patrons.
    pub patrons: Vec<Patron>,

    /// All borrowable items.
    pub catalogue: Vec<BorrowableItem>,
}

impl Library {
    /// Loads both data files.
    ///
    /// ## Errors
    /// [`StoreError::ReadFailed`] when a file cannot be opened,
    /// [`StoreError::Malformed`] when it does not parse as the expected
    /// JSON array. Either way the session cannot start.
    pub fn load(config: &StoreConfig) -> StoreResult<Self> {
        let patrons: Vec<Patron> = read_records(&config.patrons_path)?;
        let catalogue: Vec<BorrowableItem> = read_records(&config.catalogue_path)?;

        info!(
            patrons = patrons.len(),
            items = catalogue.len(),
            "Library data loaded"
        );

        Ok(Library { patrons, catalogue })
    }

    /// Saves both data files, pretty-printed.
    pub fn save(&self, config: &StoreConfig) -> StoreResult<()> {
        write_records(&config.patrons_path, &self.patrons)?;
        write_records(&config.catalogue_path, &self.catalogue)?;

        info!(
            patrons = self.patrons.len(),
            items = self.catalogue.len(),
            "Library data saved"
        );

        Ok(())
    }

    /// Registers a new patron and returns their id.
    ///
    /// Ids are sequential: one past the highest id currently in the
    /// register. The new patron starts with a clear balance, no trainings
    /// and no loans.
    ///
    /// ## Errors
    /// [`StoreError::Validation`] when the name is empty/too long or the
    /// age does not classify. The register is untouched on error.
    pub fn register_patron(&mut self, name: &str, age: i64) -> StoreResult<u32> {
        validate_patron_name(name)?;
        validate_patron_age(age)?;

        let id = self.next_patron_id();
        self.patrons.push(Patron::new(id, name.trim(), age));

        info!(id, age, "Registered patron");
        Ok(id)
    }

    /// The id the next registered patron will receive.
    pub fn next_patron_id(&self) -> u32 {
        self.patrons.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Mutable access to a patron and an item at the same time, for the
    /// loan lifecycle. `None` if either id is unknown.
    pub fn loan_pair(
        &mut self,
        patron_id: u32,
        item_id: u32,
    ) -> Option<(&mut Patron, &mut BorrowableItem)> {
        let patron = self.patrons.iter_mut().find(|p| p.id == patron_id)?;
        let item = self.catalogue.iter_mut().find(|i| i.id == item_id)?;
        Some((patron, item))
    }
}

// =============================================================================
// File Helpers
// =============================================================================

fn read_records<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    debug!(path = %path.display(), "Reading data file");

    let contents = fs::read_to_string(path).map_err(|source| StoreError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> StoreResult<()> {
    debug!(path = %path.display(), "Writing data file");

    // Pretty-print: these files are edited by hand when seeding.
    let contents =
        serde_json::to_string_pretty(records).expect("record types serialize infallibly");

    fs::write(path, contents).map_err(|source| StoreError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bat_core::{ItemKind, Money};

    /// A config pointing at a fresh scratch directory.
    fn scratch_config(tag: &str) -> StoreConfig {
        let dir = std::env::temp_dir().join(format!("bat-store-{}-{}", std::process::id(), tag));
        fs::create_dir_all(&dir).unwrap();
        StoreConfig::in_dir(dir)
    }

    fn sample_library() -> Library {
        let mut patron = Patron::new(1, "Timothy Allen", 13);
        patron.gardening_tool_training = true;
        patron.outstanding_fees = Money::from_cents(150);

        Library {
            patrons: vec![patron, Patron::new(2, "Hannah Taylor", 25)],
            catalogue: vec![BorrowableItem {
                id: 101,
                name: "Story book".to_string(),
                kind: ItemKind::Book,
                year: 2020,
                number_owned: 8,
                on_loan: 0,
            }],
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let config = scratch_config("round-trip");
        let library = sample_library();

        library.save(&config).unwrap();
        let loaded = Library::load(&config).unwrap();

        assert_eq!(loaded, library);
    }

    #[test]
    fn test_saved_catalogue_uses_original_field_names() {
        let config = scratch_config("field-names");
        sample_library().save(&config).unwrap();

        let raw = fs::read_to_string(&config.catalogue_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["item_id"], 101);
        assert_eq!(value[0]["item_name"], "Story book");
        assert_eq!(value[0]["item_type"], "Book");
    }

    #[test]
    fn test_load_missing_file() {
        let config = StoreConfig::in_dir("no/such/directory");
        let err = Library::load(&config).unwrap_err();
        assert!(matches!(err, StoreError::ReadFailed { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let config = scratch_config("malformed");
        fs::write(&config.patrons_path, "{ not json ]").unwrap();

        let err = Library::load(&config).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_register_patron_assigns_sequential_ids() {
        let mut library = sample_library();

        let id = library.register_patron("Er Jun Yet", 25).unwrap();
        assert_eq!(id, 3);
        assert_eq!(library.patrons.len(), 3);

        let newcomer = library.patrons.last().unwrap();
        assert_eq!(newcomer.name, "Er Jun Yet");
        assert_eq!(newcomer.age, 25);
        assert!(newcomer.loans.is_empty());
        assert!(newcomer.outstanding_fees.is_zero());
    }

    #[test]
    fn test_register_patron_rejects_bad_input() {
        let mut library = sample_library();

        assert!(library.register_patron("   ", 25).is_err());
        assert!(library.register_patron("Er Jun Yet", 0).is_err());
        assert!(library.register_patron("Er Jun Yet", 200).is_err());

        // Register untouched on failure.
        assert_eq!(library.patrons.len(), 2);
    }

    #[test]
    fn test_loan_pair() {
        let mut library = sample_library();

        assert!(library.loan_pair(1, 101).is_some());
        assert!(library.loan_pair(99, 101).is_none());
        assert!(library.loan_pair(1, 999).is_none());
    }
}
