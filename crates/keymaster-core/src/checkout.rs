//! # Checkout Coordinator
//!
//! The only code allowed to turn a cart into a permanent sale record and
//! to mutate catalog stock.
//!
//! ## Commit Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      checkout(cart, catalog, cashier)                   │
//! │                                                                         │
//! │  1. Empty cart?  ──────────────► Ok(None)  (no-op, not an error)       │
//! │                                                                         │
//! │  2. Re-validate EVERY line against live stock                          │
//! │     └── any line short? ───────► Err(..), nothing mutated              │
//! │                                                                         │
//! │  3. Snapshot lines, compute totals, stamp id/time/cashier              │
//! │  4. Decrement stock for every line                                     │
//! │  5. Clear the cart                                                     │
//! │  6. Return the Sale (the caller appends it to the ledger)              │
//! │                                                                         │
//! │  Steps 3-6 cannot fail once step 2 passes, which is what makes the     │
//! │  commit all-or-nothing from the caller's perspective.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart already enforced stock ceilings at add-time; the re-validation
//! here covers the window where inventory editing changed stock between
//! add-to-cart and checkout. When any line no longer fits, the whole sale
//! is rejected (no clamping, no partial commit) and the cart is left for
//! the cashier to adjust.

use chrono::Utc;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::TaxRate;
use crate::pricing::Totals;
use crate::types::{Cashier, Product, Sale, SaleLine};

/// Generates a ledger-unique sale id.
///
/// `INV-` keeps the receipt-friendly prefix; the UUID v4 body makes ids
/// collision-resistant without depending on wall-clock time, so two
/// checkouts in the same millisecond still get distinct ids.
pub fn new_sale_id() -> String {
    format!("INV-{}", Uuid::new_v4())
}

/// Commits the cart against the catalog as one logical unit.
///
/// On success the catalog has been decremented, the cart is empty, and the
/// returned [`Sale`] is ready to append to the ledger. On any error the
/// cart and catalog are exactly as they were.
///
/// An empty cart returns `Ok(None)` and mutates nothing.
pub fn checkout(
    cart: &mut Cart,
    products: &mut [Product],
    cashier: &Cashier,
    rate: TaxRate,
) -> CoreResult<Option<Sale>> {
    if cart.is_empty() {
        return Ok(None);
    }

    // Validate every line before mutating anything. Stock must never go
    // negative, even if the catalog changed since the lines were added.
    for line in cart.lines() {
        let product = products
            .iter()
            .find(|p| p.id == line.product_id)
            .ok_or_else(|| CoreError::ProductNotFound(line.product_id.clone()))?;

        if !product.can_sell(line.quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: line.quantity,
            });
        }
    }

    let totals = Totals::compute(cart.lines(), rate);
    let lines: Vec<SaleLine> = cart
        .take_lines()
        .into_iter()
        .map(|l| SaleLine {
            product_id: l.product_id,
            name: l.name,
            quantity: l.quantity,
            unit_price_cents: l.unit_price_cents,
        })
        .collect();

    for line in &lines {
        if let Some(product) = products.iter_mut().find(|p| p.id == line.product_id) {
            // Validated above; quantities are per-line unique by product id.
            debug_assert!(product.stock >= line.quantity);
            product.stock -= line.quantity;
        }
    }

    let sale = Sale {
        id: new_sale_id(),
        created_at: Utc::now(),
        lines,
        subtotal_cents: totals.subtotal_cents,
        discount_cents: totals.discount_cents,
        tax_cents: totals.tax_cents,
        grand_total_cents: totals.grand_total_cents,
        employee_id: cashier.id.clone(),
        employee_name: cashier.name.clone(),
    };

    Ok(Some(sale))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::collections::HashSet;

    fn product(id: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: Category::House,
            price_cents,
            cost_cents: 0,
            stock,
            code: format!("SKU-{}", id),
        }
    }

    fn cashier() -> Cashier {
        Cashier {
            id: "emp-1".to_string(),
            name: "Admin".to_string(),
        }
    }

    fn rate() -> TaxRate {
        TaxRate::from_bps(1500)
    }

    #[test]
    fn test_empty_cart_is_noop() {
        let mut cart = Cart::new();
        let mut catalog = vec![product("a", 2500, 5)];

        let result = checkout(&mut cart, &mut catalog, &cashier(), rate()).unwrap();

        assert!(result.is_none());
        assert_eq!(catalog[0].stock, 5);
    }

    #[test]
    fn test_successful_checkout_effects() {
        // Cart [(A, qty 2), (B, qty 1)] against stock {A: 5, B: 3}.
        let mut catalog = vec![product("a", 2500, 5), product("b", 1000, 3)];
        let mut cart = Cart::new();
        cart.add_item(&catalog[0]).unwrap();
        cart.add_item(&catalog[0]).unwrap();
        cart.add_item(&catalog[1]).unwrap();

        let sale = checkout(&mut cart, &mut catalog, &cashier(), rate())
            .unwrap()
            .expect("sale committed");

        // Stock decremented to {A: 3, B: 2}.
        assert_eq!(catalog[0].stock, 3);
        assert_eq!(catalog[1].stock, 2);

        // Sale snapshot matches the cart.
        assert_eq!(sale.lines.len(), 2);
        assert_eq!(sale.subtotal_cents, 2 * 2500 + 1000);
        assert_eq!(sale.tax_cents, 900); // 6000 * 15%
        assert_eq!(sale.grand_total_cents, 6900);
        assert_eq!(sale.employee_name, "Admin");

        // Cart resets to empty.
        assert!(cart.is_empty());
    }

    #[test]
    fn test_stock_drop_after_add_rejects_whole_sale() {
        let mut catalog = vec![product("a", 2500, 5), product("b", 1000, 3)];
        let mut cart = Cart::new();
        cart.add_item(&catalog[0]).unwrap();
        cart.add_item(&catalog[0]).unwrap();
        cart.add_item(&catalog[1]).unwrap();

        // Inventory editing depletes product A between add and checkout.
        catalog[0].stock = 1;

        let err = checkout(&mut cart, &mut catalog, &cashier(), rate()).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));

        // Whole-sale rejection: nothing decremented, cart intact.
        assert_eq!(catalog[0].stock, 1);
        assert_eq!(catalog[1].stock, 3);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_deleted_product_rejects_whole_sale() {
        let mut catalog = vec![product("a", 2500, 5), product("b", 1000, 3)];
        let mut cart = Cart::new();
        cart.add_item(&catalog[0]).unwrap();
        cart.add_item(&catalog[1]).unwrap();

        catalog.remove(0); // product A deleted from inventory

        let err = checkout(&mut cart, &mut catalog, &cashier(), rate()).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
        assert_eq!(catalog[0].stock, 3);
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_sale_ids_unique_under_rapid_checkouts() {
        let mut catalog = vec![product("a", 100, 1000)];
        let mut ids = HashSet::new();

        for _ in 0..100 {
            let mut cart = Cart::new();
            cart.add_item(&catalog[0]).unwrap();
            let sale = checkout(&mut cart, &mut catalog, &cashier(), rate())
                .unwrap()
                .unwrap();
            // Same-millisecond checkouts must still not collide.
            assert!(ids.insert(sale.id.clone()), "duplicate sale id {}", sale.id);
        }

        assert_eq!(catalog[0].stock, 900);
    }

    #[test]
    fn test_sale_decoupled_from_later_catalog_edits() {
        let mut catalog = vec![product("a", 2500, 5)];
        let mut cart = Cart::new();
        cart.add_item(&catalog[0]).unwrap();

        let sale = checkout(&mut cart, &mut catalog, &cashier(), rate())
            .unwrap()
            .unwrap();

        catalog[0].name = "Renamed".to_string();
        catalog[0].price_cents = 1;

        assert_eq!(sale.lines[0].name, "Product a");
        assert_eq!(sale.lines[0].unit_price_cents, 2500);
    }
}
