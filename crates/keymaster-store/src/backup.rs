//! # Backup Export / Import
//!
//! One JSON document carrying the full state: the three collections under
//! their named fields.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Backup Document Shape                               │
//! │                                                                         │
//! │  {                                                                      │
//! │    "products":  [ ...full catalog... ],                                │
//! │    "employees": [ ...full staff list... ],                             │
//! │    "sales":     [ ...full ledger, oldest first... ]                    │
//! │  }                                                                      │
//! │                                                                         │
//! │  Export: snapshot of all three collections, field-for-field.           │
//! │  Import: ALL three fields required. Anything missing or malformed      │
//! │          → InvalidBackup, existing state untouched (memory and disk).  │
//! │          A valid document is a blind overwrite of all three.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::store::DataStore;
use keymaster_core::{Employee, Product, Sale};

/// The full-state backup document.
///
/// All three fields are mandatory; serde rejects a document missing any
/// of them, which is exactly the import validation the boundary needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupDocument {
    pub products: Vec<Product>,
    pub employees: Vec<Employee>,
    pub sales: Vec<Sale>,
}

impl BackupDocument {
    /// Snapshots the store into a backup document.
    pub fn export(store: &DataStore) -> BackupDocument {
        BackupDocument {
            products: store.products().to_vec(),
            employees: store.employees().to_vec(),
            sales: store.sales().to_vec(),
        }
    }

    /// Serializes the document to JSON.
    pub fn to_json(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::InvalidBackup(e.to_string()))
    }

    /// Parses a backup document, rejecting anything that is not a JSON
    /// object with all three collections present and well-formed.
    pub fn from_json(text: &str) -> StoreResult<BackupDocument> {
        serde_json::from_str(text).map_err(|e| StoreError::InvalidBackup(e.to_string()))
    }
}

/// Imports a backup document into the store.
///
/// Parsing happens before any mutation: an invalid document returns
/// [`StoreError::InvalidBackup`] with the store, in memory and on disk,
/// exactly as it was. A valid one blindly overwrites all three
/// collections.
pub fn import(store: &mut DataStore, text: &str) -> StoreResult<()> {
    let doc = BackupDocument::from_json(text)?;

    info!(
        products = doc.products.len(),
        employees = doc.employees.len(),
        sales = doc.sales.len(),
        "Importing backup"
    );

    store.replace_collections(doc.products, doc.employees, doc.sales)
}

// =============================================================================
// Unit Tests
// =============================================================================
