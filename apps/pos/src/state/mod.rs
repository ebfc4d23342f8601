//! # State Module
//!
//! Application state for the terminal app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own state type:
//!
//! 1. **Better Separation of Concerns**: each type has one responsibility
//! 2. **Easier Testing**: commands take exactly the states they need
//! 3. **Clearer Command Signatures**: a cart command cannot touch staff
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │  StoreState  │ │  CartState   │ │ SessionState │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  shop name   │   │
//! │  │   DataStore  │ │    Cart      │ │  Option<     │ │  currency    │   │
//! │  │  >>          │ │  >>          │ │   Cashier>>> │ │  tax rate    │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Mutex-guarded states use with_*/with_*_mut closures                 │
//! │  • ConfigState is read-only after initialization                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod session;
mod store;

pub use cart::CartState;
pub use config::ConfigState;
pub use session::SessionState;
pub use store::StoreState;
