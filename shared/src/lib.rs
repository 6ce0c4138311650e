//! Shared types and domain logic for the Inventory Ledger Platform
//!
//! This crate contains types shared between the backend and other
//! components of the system: the pure ledger arithmetic (delta planning,
//! running balances, entry valuation) and request-level validation.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
