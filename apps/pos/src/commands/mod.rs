//! # Command Layer
//!
//! The functions the terminal surface dispatches to. Each command takes
//! exactly the state types it needs, validates input, delegates to
//! `keymaster-core` / `keymaster-store`, and returns a serializable
//! response or an [`crate::error::ApiError`].

pub mod auth;
pub mod backup;
pub mod cart;
pub mod product;
pub mod report;
pub mod sale;
pub mod staff;
