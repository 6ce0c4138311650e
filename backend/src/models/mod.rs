//! Database models for the Inventory Ledger Platform
//!
//! Re-exports models from the shared crate and adds backend-specific models

pub use shared::models::*;
