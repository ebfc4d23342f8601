//! # Receipt Presenter
//!
//! Renders a committed [`Sale`] as a printable document.
//!
//! Purely a projection: building and rendering a receipt mutates nothing,
//! and rendering the same sale twice produces byte-identical output, so
//! re-printing is always safe.
//!
//! The layout follows the shop's 80mm thermal format: centered shop
//! header, invoice metadata, one row per line item with the extended
//! price, then subtotal / VAT / grand total and a thank-you footer.

use crate::money::{Money, TaxRate};
use crate::types::Sale;

/// Printable width in characters (80mm thermal paper).
const WIDTH: usize = 42;

/// A read-only projection of one sale for display or printing.
///
/// Holds an owned copy of everything it shows; later ledger or catalog
/// state cannot change what an already-built receipt renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    shop_name: String,
    tax_label: String,
    sale: Sale,
}

impl Receipt {
    /// Builds a receipt for a committed sale.
    pub fn new(sale: &Sale, shop_name: &str, rate: TaxRate) -> Receipt {
        Receipt {
            shop_name: shop_name.to_string(),
            tax_label: format!("VAT ({}%)", rate.percentage()),
            sale: sale.clone(),
        }
    }

    /// The id of the sale this receipt projects.
    pub fn sale_id(&self) -> &str {
        &self.sale.id
    }

    /// Renders the receipt as a fixed-width document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(WIDTH);
        let thin = "-".repeat(WIDTH);

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&center(&self.shop_name));
        out.push('\n');
        out.push_str(&center("Simplified Tax Invoice"));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        // The invoice id fills nearly the whole width; give it its own line.
        out.push_str("Invoice:\n");
        out.push_str(&self.sale.id);
        out.push('\n');
        out.push_str(&row(
            "Date:",
            &self.sale.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ));
        out.push('\n');
        out.push_str(&row("Cashier:", &self.sale.employee_name));
        out.push('\n');
        out.push_str(&thin);
        out.push('\n');

        for line in &self.sale.lines {
            let label = format!("{} x{}", line.name, line.quantity);
            out.push_str(&row(&label, &line.line_total().to_string()));
            out.push('\n');
        }

        out.push_str(&thin);
        out.push('\n');
        out.push_str(&row(
            "Subtotal",
            &Money::from_cents(self.sale.subtotal_cents).to_string(),
        ));
        out.push('\n');
        out.push_str(&row(
            &self.tax_label,
            &Money::from_cents(self.sale.tax_cents).to_string(),
        ));
        out.push('\n');
        out.push_str(&row(
            "TOTAL",
            &Money::from_cents(self.sale.grand_total_cents).to_string(),
        ));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&center("Thank you for visiting!"));
        out.push('\n');

        out
    }
}

/// Centers text within the printable width.
fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= WIDTH {
        return text.to_string();
    }
    let pad = (WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Left label, right-aligned value, truncating the label when both would
/// not fit on one row.
fn row(left: &str, right: &str) -> String {
    let right_len = right.chars().count();
    let max_left = WIDTH.saturating_sub(right_len + 1);
    let left: String = left.chars().take(max_left).collect();
    let pad = WIDTH.saturating_sub(left.chars().count() + right_len);
    format!("{}{}{}", left, " ".repeat(pad), right)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SaleLine;
    use chrono::TimeZone;
    use chrono::Utc;

    fn sample_sale() -> Sale {
        Sale {
            id: "INV-00000000-0000-4000-8000-000000000001".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            lines: vec![
                SaleLine {
                    product_id: "a".to_string(),
                    name: "Brass house key".to_string(),
                    quantity: 2,
                    unit_price_cents: 2500,
                },
                SaleLine {
                    product_id: "b".to_string(),
                    name: "Car key blank".to_string(),
                    quantity: 1,
                    unit_price_cents: 1000,
                },
            ],
            subtotal_cents: 6000,
            discount_cents: 0,
            tax_cents: 900,
            grand_total_cents: 6900,
            employee_id: "emp-1".to_string(),
            employee_name: "Admin".to_string(),
        }
    }

    #[test]
    fn test_render_is_deterministic_and_idempotent() {
        let sale = sample_sale();
        let receipt = Receipt::new(&sale, "KeyMaster Store", TaxRate::from_bps(1500));

        let first = receipt.render();
        let second = receipt.render();
        assert_eq!(first, second);

        // A second receipt over the same sale renders identically too.
        let other = Receipt::new(&sale, "KeyMaster Store", TaxRate::from_bps(1500));
        assert_eq!(first, other.render());
    }

    #[test]
    fn test_render_contains_all_sections() {
        let sale = sample_sale();
        let text = Receipt::new(&sale, "KeyMaster Store", TaxRate::from_bps(1500)).render();

        assert!(text.contains("KeyMaster Store"));
        assert!(text.contains("Simplified Tax Invoice"));
        assert!(text.contains(&sale.id));
        assert!(text.contains("2026-03-14 09:26:53 UTC"));
        assert!(text.contains("Admin"));
        assert!(text.contains("Brass house key x2"));
        assert!(text.contains("50.00")); // extended price of line 1
        assert!(text.contains("VAT (15%)"));
        assert!(text.contains("9.00"));
        assert!(text.contains("69.00"));
        assert!(text.contains("Thank you for visiting!"));
    }

    #[test]
    fn test_rows_fit_width() {
        let mut sale = sample_sale();
        sale.lines[0].name = "An extraordinarily long product description".to_string();
        let text = Receipt::new(&sale, "KeyMaster Store", TaxRate::from_bps(1500)).render();

        for line in text.lines() {
            assert!(line.chars().count() <= WIDTH, "overlong row: {:?}", line);
        }
    }
}
