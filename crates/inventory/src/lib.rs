//! Inventory domain module.
//!
//! This crate contains the coffee machine's resource accounting, implemented purely
//! as deterministic domain logic (no terminal, no logging, no storage).

pub mod ledger;
pub mod recipe;
pub mod resource;

pub use ledger::{
    InventoryLedger, LedgerCommand, LedgerError, LedgerEvent, PurchaseOutcome, Refill,
    StockLevels,
};
pub use recipe::{Recipe, Requirements};
pub use resource::Resource;
