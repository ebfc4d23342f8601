//! # API Error Type
//!
//! Unified error type for the command layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in KeyMaster POS                          │
//! │                                                                         │
//! │  Terminal                     Command Layer                             │
//! │  ────────                     ─────────────                             │
//! │                                                                         │
//! │  > add HK-BR-01                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Store Error? ──── StoreError::NotFound ───────┐                │  │
//! │  │         │                                      ▼                │  │
//! │  │  Engine Error? ─── CoreError::OutOfStock ──► ApiError ─────────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄───────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  [INSUFFICIENT_STOCK] Insufficient stock for 'Brass house key': ...     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command rejection is a user-facing notice: the attempted mutation
//! was discarded and no partial state change occurred.

use serde::Serialize;

use keymaster_core::CoreError;
use keymaster_store::StoreError;

/// Error returned from command-layer functions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record lookup failed
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Persistence operation failed
    StoreError,

    /// Imported or persisted data is malformed
    InvalidData,

    /// Product has no stock / cart exceeds stock
    InsufficientStock,

    /// Credentials rejected or no active session
    AuthError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::AuthError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts transaction-engine errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::OutOfStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::InvalidData { .. } | StoreError::InvalidBackup(_) => {
                ApiError::new(ErrorCode::InvalidData, err.to_string())
            }
            StoreError::Io { .. } => {
                tracing::error!("Store I/O failure: {}", err);
                ApiError::new(ErrorCode::StoreError, "Storage operation failed")
            }
            StoreError::Hash(e) => {
                tracing::error!("Credential hashing failure: {}", e);
                ApiError::internal("Could not process credentials")
            }
            StoreError::Core(e) => ApiError::from(e),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_stock_errors_map_to_insufficient_stock() {
        let err: ApiError = CoreError::OutOfStock {
            name: "Brass house key".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err: ApiError = CoreError::InsufficientStock {
            name: "Brass house key".to_string(),
            available: 1,
            requested: 2,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }

    #[test]
    fn test_invalid_backup_maps_to_invalid_data() {
        let err: ApiError = StoreError::InvalidBackup("missing field".to_string()).into();
        assert_eq!(err.code, ErrorCode::InvalidData);
    }

    #[test]
    fn test_store_wrapped_core_error_unwraps() {
        let err: ApiError = StoreError::Core(CoreError::ProductNotFound("p1".to_string())).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
