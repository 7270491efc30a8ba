//! Store openers for the persistence layer

use std::path::{Path, PathBuf};

use outdoorsy_store::Store;
use outdoorsy_types::Result;

use crate::config::Config;

/// Open the store for reading; a missing database is `SchemaMissing`
pub fn open_existing_store(config: &Config, override_path: Option<&Path>) -> Result<Store> {
    Store::open_existing(&config.db_file(override_path))
}

/// Open (or create) the store at a custom file path
pub fn open_store_at(path: PathBuf) -> Result<Store> {
    Store::open(&path)
}

/// Open an existing store at a custom file path
pub fn open_existing_store_at(path: PathBuf) -> Result<Store> {
    Store::open_existing(&path)
}
