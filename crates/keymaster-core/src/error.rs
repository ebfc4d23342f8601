//! # Error Types
//!
//! Domain-specific error types for keymaster-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  keymaster-core errors (this file)                                     │
//! │  ├── CoreError        - Transaction-engine rule violations             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  keymaster-store errors (separate crate)                               │
//! │  └── StoreError       - Persistence and backup failures                │
//! │                                                                         │
//! │  Application errors (apps/pos)                                         │
//! │  └── ApiError         - What the terminal surface shows                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → user      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rejection here is a recoverable user-facing notice. The engine has
//! no fatal errors in its normal operating envelope, and nothing panics.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Transaction-engine rule violations.
///
/// These are caught at the point of the attempted mutation and leave all
/// state (cart, catalog, ledger) unchanged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A cart line references a product the catalog no longer has.
    ///
    /// Can only happen when inventory editing removed a product between
    /// add-to-cart and checkout; the whole sale is rejected.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The product has zero stock; adding it to the cart is rejected.
    #[error("'{name}' is out of stock")]
    OutOfStock { name: String },

    /// Requested quantity exceeds available stock.
    ///
    /// ```text
    /// Add to cart (already 3 in cart)
    ///      │
    ///      ▼
    /// Check stock: available = 3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Brass house key", available: 3, requested: 4 }
    /// ```
    #[error("Insufficient stock for '{name}': available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before business logic runs, when user input does not meet
/// field-level requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be non-negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. a malformed email or category name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Brass house key".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for 'Brass house key': available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
