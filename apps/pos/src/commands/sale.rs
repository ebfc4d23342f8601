//! # Sale Commands
//!
//! Checkout and ledger queries.
//!
//! Checkout is the single door between the cart and the permanent record:
//! it requires an open session, runs the whole commit under the store
//! lock, and hands back a receipt for the committed sale.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, ConfigState, SessionState, StoreState};
use keymaster_core::Receipt;

/// One row of the invoice log, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummary {
    pub id: String,
    pub date: String,
    pub grand_total_cents: i64,
    pub employee_name: String,
}

/// Commits the cart as a sale.
///
/// Returns `Ok(None)` when the cart is empty (checkout is a no-op then,
/// not an error). On success the catalog has been decremented, the sale
/// is in the ledger, the cart is empty, and the returned receipt is ready
/// to print.
pub fn checkout(
    store: &StoreState,
    cart: &CartState,
    session: &SessionState,
    config: &ConfigState,
) -> Result<Option<Receipt>, ApiError> {
    debug!("checkout command");

    let cashier = session
        .current()
        .ok_or_else(|| ApiError::auth("Sign in before completing a sale"))?;

    // Lock order: store, then cart.
    let sale = store.with_store_mut(|s| {
        cart.with_cart_mut(|c| s.checkout(c, &cashier, config.tax_rate()))
    })?;

    let Some(sale) = sale else {
        return Ok(None);
    };

    info!(sale_id = %sale.id, "Checkout complete");

    Ok(Some(Receipt::new(&sale, &config.shop_name, config.tax_rate())))
}

/// The invoice log, newest first.
pub fn list_sales(store: &StoreState) -> Vec<SaleSummary> {
    debug!("list_sales command");

    store.with_store(|s| {
        s.sales()
            .iter()
            .rev()
            .map(|sale| SaleSummary {
                id: sale.id.clone(),
                date: sale.created_at.to_rfc3339(),
                grand_total_cents: sale.grand_total_cents,
                employee_name: sale.employee_name.clone(),
            })
            .collect()
    })
}

/// Rebuilds the receipt for a past sale (re-print).
pub fn receipt_for(
    store: &StoreState,
    config: &ConfigState,
    sale_id: &str,
) -> Result<Receipt, ApiError> {
    debug!(sale_id = %sale_id, "receipt_for command");

    store.with_store(|s| {
        s.sales()
            .iter()
            .find(|sale| sale.id == sale_id)
            .map(|sale| Receipt::new(sale, &config.shop_name, config.tax_rate()))
            .ok_or_else(|| ApiError::not_found("Sale", sale_id))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
