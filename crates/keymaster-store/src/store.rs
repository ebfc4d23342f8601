//! # Data Store
//!
//! The single state-owning service for the three persisted collections.
//!
//! ## Collection Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       DataStore Lifecycle                               │
//! │                                                                         │
//! │  1. OPEN                                                               │
//! │     └── open(dir) → load products.json / employees.json / sales.json   │
//! │         └── fresh store? → seed the default admin account              │
//! │                                                                         │
//! │  2. MUTATE (explicit methods only)                                     │
//! │     ├── add_product / update_product / delete_product                  │
//! │     ├── add_employee / update_employee / delete_employee               │
//! │     └── checkout → stock decrement + ledger append                     │
//! │         (every mutation rewrites the affected file)                    │
//! │                                                                         │
//! │  3. REPLACE (backup import only)                                       │
//! │     └── replace_collections → blind overwrite of all three             │
//! │                                                                         │
//! │  The ledger is append-only: there is no update or delete for sales.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Consumers receive the store by injection (the app wraps it in a state
//! type); nothing reaches the collections except through these methods.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth;
use crate::error::{StoreError, StoreResult};
use keymaster_core::{Cart, Cashier, Employee, Product, Role, Sale, Specialty, TaxRate};

/// File names of the three persisted collections.
const PRODUCTS_FILE: &str = "products.json";
const EMPLOYEES_FILE: &str = "employees.json";
const SALES_FILE: &str = "sales.json";

/// Email and password of the admin account seeded into a fresh store.
///
/// Mirrors the shop's bootstrap account; the password is hashed before it
/// ever reaches disk.
pub const SEED_ADMIN_EMAIL: &str = "admin@key.com";
pub const SEED_ADMIN_PASSWORD: &str = "123";

/// Generates a new record id for products and employees.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// The process-wide store: catalog, staff and ledger, with their files.
#[derive(Debug)]
pub struct DataStore {
    dir: PathBuf,
    products: Vec<Product>,
    employees: Vec<Employee>,
    sales: Vec<Sale>,
}

impl DataStore {
    /// Opens the store in `dir`, loading all three collections.
    ///
    /// Missing files mean empty collections (first run). A file that
    /// exists but does not parse aborts the load with
    /// [`StoreError::InvalidData`] and leaves everything on disk alone.
    ///
    /// A store with no staff at all seeds the default admin account so
    /// that login is possible.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.display().to_string(), e))?;

        let products = load_collection(&dir.join(PRODUCTS_FILE))?;
        let employees: Vec<Employee> = load_collection(&dir.join(EMPLOYEES_FILE))?;
        let sales = load_collection(&dir.join(SALES_FILE))?;

        info!(
            dir = %dir.display(),
            products = products.len(),
            employees = employees.len(),
            sales = sales.len(),
            "Store opened"
        );

        let mut store = DataStore {
            dir,
            products,
            employees,
            sales,
        };

        if store.employees.is_empty() {
            store.seed_admin()?;
        }

        Ok(store)
    }

    /// The data directory this store persists into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn seed_admin(&mut self) -> StoreResult<()> {
        warn!("No staff records found, seeding default admin account");

        let admin = Employee {
            id: new_record_id(),
            name: "System Administrator".to_string(),
            email: SEED_ADMIN_EMAIL.to_string(),
            phone: None,
            national_id: None,
            address: None,
            social_status: None,
            salary_cents: None,
            role: Role::Admin,
            specialty: Some(Specialty::All),
            join_date: None,
            password_hash: Some(auth::hash_password(SEED_ADMIN_PASSWORD)?),
        };

        self.employees.push(admin);
        self.persist_employees()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The current product list, in stored order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by SKU code. Codes are not guaranteed unique;
    /// the first match in stored order wins.
    pub fn product_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Adds a product to the catalog.
    pub fn add_product(&mut self, product: Product) -> StoreResult<()> {
        debug!(id = %product.id, name = %product.name, "Adding product");
        self.products.push(product);
        self.persist_products()
    }

    /// Replaces the product record with the same id.
    pub fn update_product(&mut self, product: Product) -> StoreResult<()> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| StoreError::not_found("Product", &product.id))?;
        *slot = product;
        self.persist_products()
    }

    /// Removes a product from the catalog.
    ///
    /// Historical sales keep their own snapshots and are unaffected.
    pub fn delete_product(&mut self, id: &str) -> StoreResult<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(StoreError::not_found("Product", id));
        }
        self.persist_products()
    }

    // =========================================================================
    // Staff
    // =========================================================================

    /// The current staff list, in stored order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Looks up an employee by login email.
    pub fn employee_by_email(&self, email: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.email == email)
    }

    /// Adds a staff record.
    pub fn add_employee(&mut self, employee: Employee) -> StoreResult<()> {
        debug!(id = %employee.id, email = %employee.email, "Adding employee");
        self.employees.push(employee);
        self.persist_employees()
    }

    /// Replaces the staff record with the same id.
    pub fn update_employee(&mut self, employee: Employee) -> StoreResult<()> {
        let slot = self
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| StoreError::not_found("Employee", &employee.id))?;
        *slot = employee;
        self.persist_employees()
    }

    /// Removes a staff record.
    pub fn delete_employee(&mut self, id: &str) -> StoreResult<()> {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        if self.employees.len() == before {
            return Err(StoreError::not_found("Employee", id));
        }
        self.persist_employees()
    }

    // =========================================================================
    // Ledger & Checkout
    // =========================================================================

    /// The sale ledger, oldest first. Append-only; sales are never edited
    /// or deleted once committed.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Commits the cart: runs the core checkout pipeline against the live
    /// catalog, appends the sale to the ledger, and rewrites both files.
    ///
    /// Returns `Ok(None)` for an empty cart (no-op). Any rejection from
    /// the pipeline leaves catalog, ledger and cart untouched.
    pub fn checkout(
        &mut self,
        cart: &mut Cart,
        cashier: &Cashier,
        rate: TaxRate,
    ) -> StoreResult<Option<Sale>> {
        let sale = match keymaster_core::checkout(cart, &mut self.products, cashier, rate)? {
            Some(sale) => sale,
            None => return Ok(None),
        };

        self.sales.push(sale.clone());
        self.persist_products()?;
        self.persist_sales()?;

        info!(
            sale_id = %sale.id,
            grand_total = %sale.grand_total(),
            lines = sale.lines.len(),
            cashier = %sale.employee_name,
            "Sale committed"
        );

        Ok(Some(sale))
    }

    // =========================================================================
    // Bulk Replace (backup import)
    // =========================================================================

    /// Blindly overwrites all three collections and rewrites their files.
    ///
    /// Only the backup import path calls this; validation of the incoming
    /// document happens before it, in [`crate::backup`].
    pub fn replace_collections(
        &mut self,
        products: Vec<Product>,
        employees: Vec<Employee>,
        sales: Vec<Sale>,
    ) -> StoreResult<()> {
        self.products = products;
        self.employees = employees;
        self.sales = sales;
        self.persist_products()?;
        self.persist_employees()?;
        self.persist_sales()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_products(&self) -> StoreResult<()> {
        write_collection(&self.dir.join(PRODUCTS_FILE), &self.products)
    }

    fn persist_employees(&self) -> StoreResult<()> {
        write_collection(&self.dir.join(EMPLOYEES_FILE), &self.employees)
    }

    fn persist_sales(&self) -> StoreResult<()> {
        write_collection(&self.dir.join(SALES_FILE), &self.sales)
    }
}

/// Loads a collection file, treating a missing file as an empty
/// collection (first run) and a malformed file as a hard error.
fn load_collection<T: serde::de::DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let text = fs::read_to_string(path).map_err(|e| StoreError::io(path.display().to_string(), e))?;
    serde_json::from_str(&text).map_err(|e| StoreError::InvalidData {
        path: path.display().to_string(),
        source: e,
    })
}

/// Rewrites a collection file in full.
fn write_collection<T: serde::Serialize>(path: &Path, items: &[T]) -> StoreResult<()> {
    let text = serde_json::to_string_pretty(items).map_err(|e| StoreError::InvalidData {
        path: path.display().to_string(),
        source: e,
    })?;
    fs::write(path, text).map_err(|e| StoreError::io(path.display().to_string(), e))
}

// =============================================================================
// Unit Tests
// =============================================================================
