//! Domain models for the Inventory Ledger Platform

mod inventory;

pub use inventory::*;
