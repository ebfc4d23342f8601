//! # Credential Handling
//!
//! Salted one-way hashing for stored staff credentials, and the login
//! check against the staff collection.
//!
//! Plaintext passwords exist only transiently, on their way into
//! [`hash_password`] or [`verify_password`]; the collections only ever
//! hold argon2 hash strings.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::DataStore;
use keymaster_core::Employee;

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::Hash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored hash.
///
/// An unparseable hash counts as a mismatch, not an error; a corrupted
/// record must not open the door.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Checks login credentials against the staff collection.
///
/// Returns the matching employee, or `None` for an unknown email, a
/// record without a stored hash, or a wrong password. The three cases are
/// deliberately indistinguishable to the caller.
pub fn authenticate<'a>(
    store: &'a DataStore,
    email: &str,
    password: &str,
) -> Option<&'a Employee> {
    debug!(email = %email, "Authenticating");

    let employee = store.employee_by_email(email)?;
    let hash = employee.password_hash.as_deref()?;

    if verify_password(password, hash) {
        Some(employee)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD};
    use tempfile::TempDir;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("secret-key-123").unwrap();
        assert_ne!(hash, "secret-key-123"); // never stored plaintext
        assert!(verify_password("secret-key-123", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_is_a_mismatch() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_authenticate_seeded_admin() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::open(dir.path()).unwrap();

        let admin = authenticate(&store, SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD);
        assert!(admin.is_some());

        assert!(authenticate(&store, SEED_ADMIN_EMAIL, "wrong").is_none());
        assert!(authenticate(&store, "nobody@key.com", SEED_ADMIN_PASSWORD).is_none());
    }
}
