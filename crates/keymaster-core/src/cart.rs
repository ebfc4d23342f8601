//! # Cart
//!
//! The in-progress sale: an ordered collection of line items, enforcing
//! stock limits at selection time.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Cashier Action            Operation              Cart Change           │
//! │  ──────────────            ─────────              ───────────           │
//! │                                                                         │
//! │  Tap product ────────────► add_item() ──────────► push / qty += 1      │
//! │                              │                                          │
//! │                              ├── stock == 0?  → OutOfStock             │
//! │                              └── qty == stock? → InsufficientStock     │
//! │                                                                         │
//! │  Tap remove ─────────────► remove_item() ───────► line dropped         │
//! │                                                                         │
//! │  Tap empty ──────────────► clear() ─────────────► all lines dropped    │
//! │                                                                         │
//! │  NOTE: the cart only CHECKS stock, it never reserves or mutates it.    │
//! │        Catalog stock is untouched until checkout commits.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! State machine for one cart session:
//! `Empty → Building (add/remove cycles) → Committing → Empty`.
//! There is no separate cancelled state; `clear()` returns to `Empty`.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

/// A line in the shopping cart.
///
/// Holds a frozen copy of the product id, name and unit price captured at
/// add-time, plus a mutable quantity. If the product record changes after
/// the add, this line keeps displaying what the cashier agreed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product id (weak reference into the catalog).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen), smallest currency unit.
    pub unit_price_cents: i64,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product again
///   increments its quantity)
/// - Every quantity is >= 1 and never exceeds the product's stock as
///   observed at add-time
/// - Order of lines is insertion order and is preserved for display and
///   for the sale snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - `product.stock <= 0`: rejected with [`CoreError::OutOfStock`],
    ///   cart unchanged
    /// - product not yet in cart: a new line with quantity 1 at the
    ///   product's current price
    /// - product already in cart: quantity += 1, but only while the current
    ///   quantity is below the product's stock; otherwise rejected with
    ///   [`CoreError::InsufficientStock`]
    ///
    /// The catalog is never touched here; stock is checked, not reserved.
    pub fn add_item(&mut self, product: &Product) -> CoreResult<()> {
        if product.stock <= 0 {
            return Err(CoreError::OutOfStock {
                name: product.name.clone(),
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            if line.quantity >= product.stock {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.stock,
                    requested: line.quantity + 1,
                });
            }
            line.quantity += 1;
            return Ok(());
        }

        self.lines.push(CartLine::from_product(product));
        Ok(())
    }

    /// Removes a line entirely, regardless of quantity. No-op if absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The current ordered lines, read-only.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity currently in the cart for a product id (0 if absent).
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Takes the lines out of the cart, leaving it empty.
    ///
    /// Used by the checkout pipeline to turn cart lines into sale
    /// snapshots without cloning.
    pub(crate) fn take_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: Category::House,
            price_cents,
            cost_cents: price_cents / 2,
            stock,
            code: format!("SKU-{}", id),
        }
    }

    #[test]
    fn test_add_item_new_line() {
        let mut cart = Cart::new();
        let p = product("1", 2500, 5);

        cart.add_item(&p).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[0].unit_price_cents, 2500);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let p = product("1", 2500, 5);

        cart.add_item(&p).unwrap();
        cart.add_item(&p).unwrap();

        assert_eq!(cart.lines().len(), 1); // still one unique line
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_add_out_of_stock_rejected_and_cart_unchanged() {
        let mut cart = Cart::new();
        let p = product("1", 2500, 0);

        let err = cart.add_item(&p).unwrap_err();
        assert!(matches!(err, CoreError::OutOfStock { .. }));
        assert!(cart.is_empty());

        // Rejection is idempotent: repeating it still changes nothing.
        assert!(cart.add_item(&p).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_never_exceeds_stock() {
        let mut cart = Cart::new();
        let p = product("1", 2500, 2);

        cart.add_item(&p).unwrap();
        cart.add_item(&p).unwrap();
        let err = cart.add_item(&p).unwrap_err();

        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 2,
                requested: 3,
                ..
            }
        ));
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut p = product("1", 2500, 5);

        cart.add_item(&p).unwrap();
        p.price_cents = 9900; // catalog edit after the add
        cart.add_item(&p).unwrap();

        assert_eq!(cart.lines()[0].unit_price_cents, 2500);
    }

    #[test]
    fn test_remove_item_drops_whole_line() {
        let mut cart = Cart::new();
        let p = product("1", 2500, 5);

        cart.add_item(&p).unwrap();
        cart.add_item(&p).unwrap();
        cart.remove_item("1");

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        let p = product("1", 2500, 5);
        cart.add_item(&p).unwrap();

        cart.remove_item("other");

        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 2500, 5)).unwrap();
        cart.add_item(&product("2", 1000, 5)).unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_lines_preserve_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&product("b", 1000, 5)).unwrap();
        cart.add_item(&product("a", 2000, 5)).unwrap();
        cart.add_item(&product("c", 3000, 5)).unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }
}
