//! # Auth Commands
//!
//! Login and logout against the staff collection.
//!
//! A credential mismatch is a transient notice: the message is shown,
//! nothing locks out, and no state changes. There is no rate limiting in
//! current scope.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{SessionState, StoreState};
use keymaster_core::Cashier;
use keymaster_store::auth;

/// Checks credentials and opens a session.
///
/// Unknown email and wrong password produce the same message; which of
/// the two failed is deliberately not revealed.
pub fn login(
    store: &StoreState,
    session: &SessionState,
    email: &str,
    password: &str,
) -> Result<Cashier, ApiError> {
    debug!(email = %email, "login command");

    let cashier = store.with_store(|s| {
        auth::authenticate(s, email, password).map(Cashier::from)
    });

    match cashier {
        Some(cashier) => {
            info!(employee = %cashier.name, "Signed in");
            session.sign_in(cashier.clone());
            Ok(cashier)
        }
        None => Err(ApiError::auth("Email or password is incorrect")),
    }
}

/// Closes the session. Safe to call when already logged out.
pub fn logout(session: &SessionState) {
    debug!("logout command");
    session.sign_out();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use keymaster_store::store::{SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD};
    use keymaster_store::DataStore;
    use tempfile::TempDir;

    fn states(dir: &std::path::Path) -> (StoreState, SessionState) {
        let store = DataStore::open(dir).unwrap();
        (StoreState::new(store), SessionState::new())
    }

    #[test]
    fn test_login_seeded_admin() {
        let dir = TempDir::new().unwrap();
        let (store, session) = states(dir.path());

        let cashier = login(&store, &session, SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD).unwrap();
        assert_eq!(session.current().unwrap().id, cashier.id);
    }

    #[test]
    fn test_bad_credentials_leave_session_closed() {
        let dir = TempDir::new().unwrap();
        let (store, session) = states(dir.path());

        let err = login(&store, &session, SEED_ADMIN_EMAIL, "wrong").unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthError);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_logout() {
        let dir = TempDir::new().unwrap();
        let (store, session) = states(dir.path());

        login(&store, &session, SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD).unwrap();
        logout(&session);
        assert!(session.current().is_none());

        logout(&session); // idempotent
    }
}
