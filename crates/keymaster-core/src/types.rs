//! # Domain Types
//!
//! Core domain types used throughout KeyMaster POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Employee     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (INV-UUID)  │   │  id (UUID)      │       │
//! │  │  code (SKU)     │   │  lines          │   │  email          │       │
//! │  │  category       │   │  totals         │   │  role           │       │
//! │  │  price_cents    │   │  employee       │   │  password_hash  │       │
//! │  │  stock          │   │  created_at     │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sales use the snapshot pattern: each [`SaleLine`] carries a frozen copy
//! of the product name and unit price, so later catalog edits never alter
//! the historical record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// Product category in the key shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// House/door keys.
    House,
    /// Car keys and blanks.
    Car,
    /// Key/transponder programming services.
    Programming,
    /// Keychains, covers and other accessories.
    Accessory,
}

impl Category {
    /// Parses a category from its lowercase persisted name.
    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "house" => Some(Category::House),
            "car" => Some(Category::Car),
            "programming" => Some(Category::Programming),
            "accessory" => Some(Category::Accessory),
            _ => None,
        }
    }

    /// The lowercase persisted name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::House => "house",
            Category::Car => "car",
            Category::Programming => "programming",
            Category::Accessory => "accessory",
        }
    }
}

/// A product available for sale.
///
/// Stock is mutated only by the checkout pipeline; inventory editing
/// replaces whole records through the store layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to the cashier and on receipts.
    pub name: String,

    /// Product category.
    pub category: Category,

    /// Selling price in the smallest currency unit.
    pub price_cents: i64,

    /// Acquisition cost in the smallest currency unit.
    pub cost_cents: i64,

    /// Units currently on hand. Never negative.
    pub stock: i64,

    /// Free-text SKU code. Not guaranteed unique.
    pub code: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `quantity` more units could be sold.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Sale
// =============================================================================

/// One line of a completed sale.
///
/// Snapshot pattern: name and unit price are frozen copies taken from the
/// cart, decoupled from the live product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    /// The product this line was sold against.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// Quantity sold.
    pub quantity: i64,

    /// Unit price at time of sale (frozen), smallest currency unit.
    pub unit_price_cents: i64,
}

impl SaleLine {
    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// A completed sale. Immutable once created; appended to the ledger and
/// never edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique id across the whole ledger, format `INV-<uuid4>`.
    pub id: String,

    /// When the sale was committed.
    pub created_at: DateTime<Utc>,

    /// Frozen line snapshots.
    pub lines: Vec<SaleLine>,

    /// Sum of line totals, before tax.
    pub subtotal_cents: i64,

    /// Always 0 in current scope; kept in the record shape.
    pub discount_cents: i64,

    /// VAT on the subtotal.
    pub tax_cents: i64,

    /// Subtotal + tax.
    pub grand_total_cents: i64,

    /// Id of the employee who completed the sale.
    pub employee_id: String,

    /// Name of the employee who completed the sale (frozen).
    pub employee_name: String,
}

impl Sale {
    /// Grand total as Money.
    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_cents(self.grand_total_cents)
    }
}

// =============================================================================
// Staff
// =============================================================================

/// Staff role within the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    SeniorTech,
    JuniorTech,
    Sales,
    Accountant,
    Employee,
}

/// Technical specialty of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    Programming,
    Cutting,
    SmartLocks,
    AutoUnlock,
    Sales,
    All,
}

/// Marital status recorded for payroll paperwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

/// A staff record.
///
/// Credentials are stored as a salted argon2 hash, never plaintext.
/// Hashing and verification live in the store layer; this type only
/// carries the hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub name: String,

    /// Login identifier.
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_status: Option<SocialStatus>,

    /// Monthly salary, smallest currency unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_cents: Option<i64>,

    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,

    /// Salted argon2 hash of the login password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

/// The identity a checkout is committed under.
///
/// A deliberately thin projection of [`Employee`]: the transaction engine
/// needs only the id and display name, so catalog and staff editing stay
/// out of its dependency surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cashier {
    pub id: String,
    pub name: String,
}

impl From<&Employee> for Cashier {
    fn from(e: &Employee) -> Self {
        Cashier {
            id: e.id.clone(),
            name: e.name.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for c in [
            Category::House,
            Category::Car,
            Category::Programming,
            Category::Accessory,
        ] {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("boat"), None);
    }

    #[test]
    fn test_can_sell() {
        let p = Product {
            id: "p1".to_string(),
            name: "Brass house key".to_string(),
            category: Category::House,
            price_cents: 2500,
            cost_cents: 800,
            stock: 3,
            code: "HK-01".to_string(),
        };
        assert!(p.can_sell(3));
        assert!(!p.can_sell(4));
    }

    #[test]
    fn test_sale_line_total() {
        let line = SaleLine {
            product_id: "p1".to_string(),
            name: "Brass house key".to_string(),
            quantity: 3,
            unit_price_cents: 2500,
        };
        assert_eq!(line.line_total().cents(), 7500);
    }

    #[test]
    fn test_sale_serializes_camel_case() {
        let sale = Sale {
            id: "INV-x".to_string(),
            created_at: Utc::now(),
            lines: vec![],
            subtotal_cents: 0,
            discount_cents: 0,
            tax_cents: 0,
            grand_total_cents: 0,
            employee_id: "e1".to_string(),
            employee_name: "Admin".to_string(),
        };
        let json = serde_json::to_string(&sale).unwrap();
        assert!(json.contains("grandTotalCents"));
        assert!(json.contains("employeeName"));
    }
}
