//! HTTP handlers for the Inventory Ledger Platform

mod health;
mod inventory;

pub use health::*;
pub use inventory::*;
