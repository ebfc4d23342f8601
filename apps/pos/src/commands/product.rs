//! # Product Commands
//!
//! Inventory management: the catalog-editing surface.
//!
//! These commands replace whole records through the store; the only code
//! that ever adjusts `stock` incrementally is the checkout pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;
use keymaster_core::{validation, Category, Product};
use keymaster_store::new_record_id;

/// The editable fields of a product, as entered in the inventory form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub category: Category,
    pub price_cents: i64,
    pub cost_cents: i64,
    pub stock: i64,
    pub code: String,
}

impl ProductInput {
    fn validate(&self) -> Result<(), ApiError> {
        validation::validate_name(&self.name).map_err(|e| ApiError::validation(e.to_string()))?;
        validation::validate_code(&self.code).map_err(|e| ApiError::validation(e.to_string()))?;
        validation::validate_price_cents(self.price_cents)
            .map_err(|e| ApiError::validation(e.to_string()))?;
        validation::validate_price_cents(self.cost_cents)
            .map_err(|e| ApiError::validation(e.to_string()))?;
        validation::validate_stock(self.stock).map_err(|e| ApiError::validation(e.to_string()))?;
        Ok(())
    }

    fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            category: self.category,
            price_cents: self.price_cents,
            cost_cents: self.cost_cents,
            stock: self.stock,
            code: self.code.trim().to_string(),
        }
    }
}

/// The full catalog, in stored order.
pub fn list_products(store: &StoreState) -> Vec<Product> {
    debug!("list_products command");
    store.with_store(|s| s.products().to_vec())
}

/// Adds a product to the catalog.
pub fn add_product(store: &StoreState, input: ProductInput) -> Result<Product, ApiError> {
    debug!(name = %input.name, "add_product command");
    input.validate()?;

    let product = input.into_product(new_record_id());
    store.with_store_mut(|s| s.add_product(product.clone()))?;
    Ok(product)
}

/// Replaces every editable field of an existing product.
pub fn update_product(
    store: &StoreState,
    id: &str,
    input: ProductInput,
) -> Result<Product, ApiError> {
    debug!(id = %id, "update_product command");
    input.validate()?;

    let product = input.into_product(id.to_string());
    store.with_store_mut(|s| s.update_product(product.clone()))?;
    Ok(product)
}

/// Removes a product from the catalog. Historical sales are unaffected.
pub fn delete_product(store: &StoreState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_product command");
    store.with_store_mut(|s| s.delete_product(id))?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use keymaster_store::DataStore;
    use tempfile::TempDir;

    fn store_state(dir: &std::path::Path) -> StoreState {
        StoreState::new(DataStore::open(dir).unwrap())
    }

    fn input(name: &str, stock: i64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            category: Category::House,
            price_cents: 2500,
            cost_cents: 800,
            stock,
            code: "HK-BR-01".to_string(),
        }
    }

    #[test]
    fn test_add_list_update_delete() {
        let dir = TempDir::new().unwrap();
        let store = store_state(dir.path());

        let created = add_product(&store, input("Brass house key", 10)).unwrap();
        assert_eq!(list_products(&store).len(), 1);

        let updated = update_product(&store, &created.id, input("Brass house key", 4)).unwrap();
        assert_eq!(updated.stock, 4);
        assert_eq!(list_products(&store)[0].stock, 4);

        delete_product(&store, &created.id).unwrap();
        assert!(list_products(&store).is_empty());
    }

    #[test]
    fn test_validation_rejections() {
        let dir = TempDir::new().unwrap();
        let store = store_state(dir.path());

        let err = add_product(&store, input("", 10)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let mut bad = input("Brass house key", 10);
        bad.price_cents = -1;
        assert_eq!(
            add_product(&store, bad).unwrap_err().code,
            ErrorCode::ValidationError
        );

        let mut bad = input("Brass house key", -3);
        bad.stock = -3;
        assert_eq!(
            add_product(&store, bad).unwrap_err().code,
            ErrorCode::ValidationError
        );

        assert!(list_products(&store).is_empty()); // nothing slipped through
    }

    #[test]
    fn test_update_unknown_product() {
        let dir = TempDir::new().unwrap();
        let store = store_state(dir.path());

        let err = update_product(&store, "ghost", input("X", 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(
            delete_product(&store, "ghost").unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
