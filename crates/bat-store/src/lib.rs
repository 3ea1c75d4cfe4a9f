//! # bat-store: Persistence for BAT
//!
//! Everything that touches the filesystem lives here. The business rules in
//! `bat-core` never see a path; this crate loads the two JSON data files
//! into an owned [`Library`], lets the application mutate it through plain
//! `&mut` access, and writes it back on shutdown.
//!
//! ## Data Files
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  data/patrons.json      [ { id, name, age, outstanding_fees,        │
//! │                             gardening_tool_training, ...,           │
//! │                             loans: [...] }, ... ]                   │
//! │                                                                     │
//! │  data/catalogue.json    [ { item_id, item_name, item_type, year,    │
//! │                             number_owned, on_loan }, ... ]          │
//! │                                                                     │
//! │  Load at session start ──► mutate in memory ──► save at quit        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - Data file locations (defaults + env overrides)
//! - [`library`] - The owned patron register and catalogue
//! - [`search`] - Lookup functions over the loaded collections
//! - [`error`] - Store error types

pub mod config;
pub mod error;
pub mod library;
pub mod search;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use library::Library;
