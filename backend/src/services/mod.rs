//! Business logic services for the Inventory Ledger Platform

pub mod inventory;

pub use inventory::InventoryService;
