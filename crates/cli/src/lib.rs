//! Interactive driver for the coffee machine.
//!
//! Reads one command per line, routes it to the inventory ledger and writes the
//! result back. Any `BufRead`/`Write` pair works, so sessions can run against
//! stdin/stdout or in-memory buffers.

pub mod action;
pub mod config;
pub mod console;
pub mod error;

pub use action::{Action, BuySelection};
pub use config::{ConfigError, MachineConfig};
pub use console::CommandLoop;
pub use error::{CliError, CliResult};
