//! # Staff Commands
//!
//! Employee record management.
//!
//! Passwords cross this boundary exactly once, on their way into the
//! argon2 hasher; list responses never include the stored hash.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;
use chrono::NaiveDate;
use keymaster_core::{validation, Employee, Role, SocialStatus, Specialty};
use keymaster_store::{hash_password, new_record_id};

/// The editable fields of a staff record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    /// Plaintext only in transit; hashed before storage. `None` on update
    /// keeps the existing credential.
    pub password: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub specialty: Option<Specialty>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub social_status: Option<SocialStatus>,
    #[serde(default)]
    pub salary_cents: Option<i64>,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

impl EmployeeInput {
    fn validate(&self) -> Result<(), ApiError> {
        validation::validate_name(&self.name).map_err(|e| ApiError::validation(e.to_string()))?;
        validation::validate_email(&self.email)
            .map_err(|e| ApiError::validation(e.to_string()))?;
        if let Some(salary) = self.salary_cents {
            if salary < 0 {
                return Err(ApiError::validation("salary must not be negative"));
            }
        }
        Ok(())
    }
}

/// A staff record as shown in lists: everything except the credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub specialty: Option<Specialty>,
}

impl From<&Employee> for EmployeeSummary {
    fn from(e: &Employee) -> Self {
        EmployeeSummary {
            id: e.id.clone(),
            name: e.name.clone(),
            email: e.email.clone(),
            role: e.role,
            specialty: e.specialty,
        }
    }
}

/// The staff list, in stored order.
pub fn list_employees(store: &StoreState) -> Vec<EmployeeSummary> {
    debug!("list_employees command");
    store.with_store(|s| s.employees().iter().map(EmployeeSummary::from).collect())
}

/// Adds a staff record, hashing the password if one was provided.
pub fn add_employee(store: &StoreState, input: EmployeeInput) -> Result<EmployeeSummary, ApiError> {
    debug!(email = %input.email, "add_employee command");
    input.validate()?;

    let password_hash = match input.password.as_deref() {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let employee = Employee {
        id: new_record_id(),
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        phone: input.phone,
        national_id: input.national_id,
        address: input.address,
        social_status: input.social_status,
        salary_cents: input.salary_cents,
        role: input.role,
        specialty: input.specialty,
        join_date: input.join_date,
        password_hash,
    };

    let summary = EmployeeSummary::from(&employee);
    store.with_store_mut(|s| s.add_employee(employee))?;
    Ok(summary)
}

/// Updates a staff record. A missing password keeps the stored hash.
pub fn update_employee(
    store: &StoreState,
    id: &str,
    input: EmployeeInput,
) -> Result<EmployeeSummary, ApiError> {
    debug!(id = %id, "update_employee command");
    input.validate()?;

    let password_hash = match input.password.as_deref() {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    store.with_store_mut(|s| {
        let existing = s
            .employee(id)
            .ok_or_else(|| ApiError::not_found("Employee", id))?;

        let employee = Employee {
            id: id.to_string(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone,
            national_id: input.national_id,
            address: input.address,
            social_status: input.social_status,
            salary_cents: input.salary_cents,
            role: input.role,
            specialty: input.specialty,
            join_date: input.join_date,
            password_hash: password_hash.or_else(|| existing.password_hash.clone()),
        };

        let summary = EmployeeSummary::from(&employee);
        s.update_employee(employee)?;
        Ok(summary)
    })
}

/// Removes a staff record.
pub fn delete_employee(store: &StoreState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_employee command");
    store.with_store_mut(|s| s.delete_employee(id))?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use keymaster_store::{verify_password, DataStore};
    use tempfile::TempDir;

    fn store_state(dir: &std::path::Path) -> StoreState {
        StoreState::new(DataStore::open(dir).unwrap())
    }

    fn input(email: &str) -> EmployeeInput {
        EmployeeInput {
            name: "Omar".to_string(),
            email: email.to_string(),
            password: Some("cutting-keys".to_string()),
            role: Role::SeniorTech,
            specialty: Some(Specialty::Cutting),
            phone: None,
            national_id: None,
            address: None,
            social_status: None,
            salary_cents: Some(650_000),
            join_date: None,
        }
    }

    #[test]
    fn test_add_hashes_password() {
        let dir = TempDir::new().unwrap();
        let store = store_state(dir.path());

        let added = add_employee(&store, input("omar@key.com")).unwrap();

        store.with_store(|s| {
            let record = s.employee(&added.id).unwrap();
            let hash = record.password_hash.as_deref().unwrap();
            assert_ne!(hash, "cutting-keys");
            assert!(verify_password("cutting-keys", hash));
        });
    }

    #[test]
    fn test_update_without_password_keeps_credential() {
        let dir = TempDir::new().unwrap();
        let store = store_state(dir.path());
        let added = add_employee(&store, input("omar@key.com")).unwrap();

        let mut change = input("omar@key.com");
        change.password = None;
        change.role = Role::Manager;
        update_employee(&store, &added.id, change).unwrap();

        store.with_store(|s| {
            let record = s.employee(&added.id).unwrap();
            assert_eq!(record.role, Role::Manager);
            assert!(verify_password(
                "cutting-keys",
                record.password_hash.as_deref().unwrap()
            ));
        });
    }

    #[test]
    fn test_list_never_exposes_hash() {
        let dir = TempDir::new().unwrap();
        let store = store_state(dir.path());
        add_employee(&store, input("omar@key.com")).unwrap();

        let json = serde_json::to_string(&list_employees(&store)).unwrap();
        assert!(!json.contains("passwordHash"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn test_validation_and_missing_records() {
        let dir = TempDir::new().unwrap();
        let store = store_state(dir.path());

        let mut bad = input("not-an-email");
        bad.email = "not-an-email".to_string();
        assert_eq!(
            add_employee(&store, bad).unwrap_err().code,
            ErrorCode::ValidationError
        );

        assert_eq!(
            update_employee(&store, "ghost", input("x@key.com"))
                .unwrap_err()
                .code,
            ErrorCode::NotFound
        );
        assert_eq!(
            delete_employee(&store, "ghost").unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
