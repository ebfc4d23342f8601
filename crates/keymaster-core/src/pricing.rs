//! # Pricing Calculator
//!
//! Derives subtotal, tax and grand total from cart lines.
//!
//! Pure function, no internal state: totals are recomputed from the lines
//! on every call and never stored next to the cart, so they cannot drift
//! out of sync with it. Rounding happens exactly once, inside the tax
//! computation ([`Money::calculate_tax`]); subtotal and grand total are
//! exact integer sums.

use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::money::{Money, TaxRate};

/// Totals derived from a set of cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of line totals before tax.
    pub subtotal_cents: i64,

    /// Always 0 in current scope; kept in the shape.
    pub discount_cents: i64,

    /// VAT on the subtotal at the fixed rate.
    pub tax_cents: i64,

    /// Subtotal + tax. Holds exactly: no independent rounding.
    pub grand_total_cents: i64,
}

impl Totals {
    /// Computes totals for the given lines at the given tax rate.
    pub fn compute(lines: &[CartLine], rate: TaxRate) -> Totals {
        let subtotal: Money = lines.iter().map(|l| l.line_total()).sum();
        let tax = subtotal.calculate_tax(rate);
        let grand_total = subtotal + tax;

        Totals {
            subtotal_cents: subtotal.cents(),
            discount_cents: 0,
            tax_cents: tax.cents(),
            grand_total_cents: grand_total.cents(),
        }
    }

    /// Totals for an empty cart.
    pub const fn empty() -> Totals {
        Totals {
            subtotal_cents: 0,
            discount_cents: 0,
            tax_cents: 0,
            grand_total_cents: 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::types::{Category, Product};

    fn product(id: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: Category::Car,
            price_cents,
            cost_cents: 0,
            stock,
            code: format!("SKU-{}", id),
        }
    }

    fn rate() -> TaxRate {
        TaxRate::from_bps(1500)
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = Totals::compute(&[], rate());
        assert_eq!(totals, Totals::empty());
    }

    #[test]
    fn test_grand_total_is_subtotal_plus_tax() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 2500, 5)).unwrap();
        cart.add_item(&product("1", 2500, 5)).unwrap();
        cart.add_item(&product("2", 999, 5)).unwrap();

        let totals = Totals::compute(cart.lines(), rate());

        assert_eq!(totals.subtotal_cents, 5999);
        assert_eq!(totals.tax_cents, 900); // 5999 * 0.15 = 899.85 -> 900
        assert_eq!(
            totals.grand_total_cents,
            totals.subtotal_cents + totals.tax_cents
        );
    }

    #[test]
    fn test_tax_is_fifteen_percent_of_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 10000, 5)).unwrap();

        let totals = Totals::compute(cart.lines(), rate());

        let expected = (totals.subtotal_cents as f64 * 0.15).round() as i64;
        assert_eq!(totals.tax_cents, expected);
    }

    #[test]
    fn test_totals_independent_of_operation_order() {
        // Same final lines reached by different add/remove sequences must
        // price identically: there is no hidden derived state.
        let a = product("a", 1234, 9);
        let b = product("b", 567, 9);

        let mut cart1 = Cart::new();
        cart1.add_item(&a).unwrap();
        cart1.add_item(&b).unwrap();
        cart1.add_item(&a).unwrap();

        let mut cart2 = Cart::new();
        cart2.add_item(&b).unwrap();
        cart2.add_item(&b).unwrap();
        cart2.remove_item("b");
        cart2.add_item(&a).unwrap();
        cart2.add_item(&a).unwrap();
        cart2.add_item(&b).unwrap();

        let t1 = Totals::compute(cart1.lines(), rate());
        let t2 = Totals::compute(cart2.lines(), rate());
        assert_eq!(t1.subtotal_cents, t2.subtotal_cents);
        assert_eq!(t1.tax_cents, t2.tax_cents);
        assert_eq!(t1.grand_total_cents, t2.grand_total_cents);
    }

    #[test]
    fn test_discount_always_zero() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", 2500, 5)).unwrap();
        assert_eq!(Totals::compute(cart.lines(), rate()).discount_cents, 0);
    }
}
