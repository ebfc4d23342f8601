//! # Session State
//!
//! Tracks who is currently logged in.
//!
//! The transaction engine only ever sees the thin [`Cashier`] identity;
//! the full staff record stays in the store.

use std::sync::{Arc, Mutex};

use keymaster_core::Cashier;

/// The authenticated-user slot. `None` means the login screen.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current: Arc<Mutex<Option<Cashier>>>,
}

impl SessionState {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        SessionState {
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Records a successful login.
    pub fn sign_in(&self, cashier: Cashier) {
        let mut current = self.current.lock().expect("Session mutex poisoned");
        *current = Some(cashier);
    }

    /// Clears the session.
    pub fn sign_out(&self) {
        let mut current = self.current.lock().expect("Session mutex poisoned");
        *current = None;
    }

    /// The currently signed-in cashier, if any.
    pub fn current(&self) -> Option<Cashier> {
        self.current
            .lock()
            .expect("Session mutex poisoned")
            .clone()
    }
}
