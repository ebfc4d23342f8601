//! # Cart State
//!
//! Holds the cart for the checkout session in progress.
//!
//! The cart itself (lines, stock checks, totals input) lives in
//! `keymaster-core`; this wrapper only adds shared ownership. One cart per
//! authenticated session - there is no multi-till sharing.

use std::sync::{Arc, Mutex};

use keymaster_core::Cart;

/// Shared cart state.
///
/// `Arc<Mutex<Cart>>` because several commands touch the cart and only
/// one of them may mutate it at a time.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
