//! # Backup Commands
//!
//! Full-state export to a file and import from one.
//!
//! The document format and its validation live in `keymaster-store`;
//! these commands only add the file I/O on either side of it.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ApiError, ErrorCode};
use crate::state::StoreState;
use keymaster_store::{backup, BackupDocument};

/// Writes the full state (products, employees, sales) to `path` as one
/// JSON document.
pub fn export_backup(store: &StoreState, path: &Path) -> Result<(), ApiError> {
    debug!(path = %path.display(), "export_backup command");

    let json = store.with_store(|s| BackupDocument::export(s).to_json())?;

    fs::write(path, json).map_err(|e| {
        ApiError::new(
            ErrorCode::StoreError,
            format!("Could not write backup to {}: {}", path.display(), e),
        )
    })?;

    info!(path = %path.display(), "Backup exported");
    Ok(())
}

/// Restores the full state from a backup file.
///
/// A file that cannot be read, parsed, or is missing any of the three
/// collections leaves existing state untouched and reports the distinct
/// invalid-data outcome.
pub fn import_backup(store: &StoreState, path: &Path) -> Result<(), ApiError> {
    debug!(path = %path.display(), "import_backup command");

    let text = fs::read_to_string(path).map_err(|e| {
        ApiError::new(
            ErrorCode::StoreError,
            format!("Could not read backup from {}: {}", path.display(), e),
        )
    })?;

    store.with_store_mut(|s| backup::import(s, &text))?;

    info!(path = %path.display(), "Backup imported");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
