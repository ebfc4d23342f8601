//! # Store Error Types
//!
//! Error types for persistence and backup operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the file path and categorization      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in apps/pos) ← what the terminal shows                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The load/import boundary errors (`InvalidData`, `InvalidBackup`) carry
//! the guarantee that in-memory state was left untouched.

use keymaster_core::CoreError;
use thiserror::Error;

/// Persistence and backup errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a collection file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A persisted collection file exists but does not parse.
    ///
    /// The load aborts and whatever is on disk stays as it is; nothing is
    /// overwritten with a guess.
    #[error("invalid data in {path}: {source}")]
    InvalidData {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A backup document is malformed or missing one of the three
    /// required collections. Existing state is untouched.
    #[error("invalid backup document: {0}")]
    InvalidBackup(String),

    /// Record lookup by id failed.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Credential hashing failed.
    #[error("credential hashing failed: {0}")]
    Hash(String),

    /// Transaction-engine rejection bubbling up through the store.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Product", "p-1");
        assert_eq!(err.to_string(), "Product not found: p-1");
    }

    #[test]
    fn test_core_error_wraps_transparently() {
        let core = CoreError::OutOfStock {
            name: "Brass house key".to_string(),
        };
        let err: StoreError = core.into();
        assert_eq!(err.to_string(), "'Brass house key' is out of stock");
    }
}
