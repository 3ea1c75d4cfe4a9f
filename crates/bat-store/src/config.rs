//! # Store Configuration
//!
//! Where the two data files live.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BAT_*`)
//! 2. Defaults (this file): `data/` under the working directory
//!
//! Configuration is read-only after startup; there is no hot reload in a
//! single-user terminal session.

use std::path::{Path, PathBuf};

/// Locations of the patron register and the item catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the patron register file.
    pub patrons_path: PathBuf,

    /// Path of the item catalogue file.
    pub catalogue_path: PathBuf,
}

impl Default for StoreConfig {
    /// Returns the default layout: `data/patrons.json` and
    /// `data/catalogue.json` under the working directory.
    fn default() -> Self {
        StoreConfig::in_dir("data")
    }
}

impl StoreConfig {
    /// Both data files under one directory, with their standard names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        StoreConfig {
            patrons_path: dir.join("patrons.json"),
            catalogue_path: dir.join("catalogue.json"),
        }
    }

    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BAT_DATA_DIR`: directory holding both files
    /// - `BAT_PATRONS_FILE`: override the patron register path
    /// - `BAT_CATALOGUE_FILE`: override the catalogue path
    pub fn from_env() -> Self {
        let mut config = match std::env::var("BAT_DATA_DIR") {
            Ok(dir) => StoreConfig::in_dir(dir),
            Err(_) => StoreConfig::default(),
        };

        if let Ok(path) = std::env::var("BAT_PATRONS_FILE") {
            config.patrons_path = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("BAT_CATALOGUE_FILE") {
            config.catalogue_path = PathBuf::from(path);
        }

        config
    }
}
