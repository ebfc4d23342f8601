//! # Cart Commands
//!
//! Cart manipulation for the cashier screen.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Building │────►│ Checkout │────►│  Empty   │       │
//! │  │  Cart    │     │          │     │ (sale.rs)│     │ (reset)  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────► (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals in every response are recomputed from the lines; they are never
//! cached between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState, StoreState};
use keymaster_core::{Cart, CartLine, Totals};

/// Cart response including lines and derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: Totals,
}

impl CartResponse {
    fn from_cart(cart: &Cart, config: &ConfigState) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: Totals::compute(cart.lines(), config.tax_rate()),
        }
    }
}

/// Gets the current cart contents and totals.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from_cart(c, config))
}

/// Adds one unit of a product to the cart.
///
/// `product_ref` is a product id or, failing that, a SKU code - the
/// cashier screen works with whichever is at hand. Stock is checked
/// against the live catalog at add-time; the catalog itself is untouched
/// until checkout.
pub fn add_to_cart(
    store: &StoreState,
    cart: &CartState,
    config: &ConfigState,
    product_ref: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_ref = %product_ref, "add_to_cart command");

    store.with_store(|s| {
        let product = s
            .product(product_ref)
            .or_else(|| s.product_by_code(product_ref))
            .ok_or_else(|| ApiError::not_found("Product", product_ref))?;

        cart.with_cart_mut(|c| {
            c.add_item(product)?;
            Ok(CartResponse::from_cart(c, config))
        })
    })
}

/// Removes a line from the cart. No-op if the product is not in it.
pub fn remove_from_cart(
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(product_id);
        CartResponse::from_cart(c, config)
    })
}

/// Empties the cart.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from_cart(c, config)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
