//! # keymaster-core: Pure Business Logic for KeyMaster POS
//!
//! This crate is the **heart** of KeyMaster POS: the transaction engine
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KeyMaster POS Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal Surface (apps/pos)                    │   │
//! │  │    login ──► cashier screen ──► checkout ──► receipt            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ keymaster-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │ checkout │ │ receipt │ │   │
//! │  │   │ Product │ │  Money  │ │  Cart   │ │ commit   │ │ render  │ │   │
//! │  │   │  Sale   │ │ TaxRate │ │CartLine │ │ pipeline │ │         │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILESYSTEM • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              keymaster-store (Persistence Layer)                │   │
//! │  │          JSON collections: products, employees, sales           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Employee, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The in-progress sale with stock-limit enforcement
//! - [`pricing`] - Subtotal / tax / grand total derivation
//! - [`checkout`] - The cart-to-sale commit pipeline
//! - [`receipt`] - Printable projection of a committed sale
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic, no hidden derived state
//! 2. **No I/O**: filesystem, network, terminal access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values in the smallest unit (i64)
//! 4. **Explicit Errors**: typed errors, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use keymaster_core::Cart` instead of
// `use keymaster_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use checkout::{checkout, new_sale_id};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use pricing::Totals;
pub use receipt::Receipt;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed VAT rate in basis points (1500 = 15%).
///
/// Tax-jurisdiction configurability is out of scope; the rate is a single
/// constant consumed through [`TaxRate::default`].
pub const DEFAULT_TAX_RATE_BPS: u32 = 1500;

/// Stock level below which a product is flagged on the dashboard.
pub const LOW_STOCK_THRESHOLD: i64 = 5;
