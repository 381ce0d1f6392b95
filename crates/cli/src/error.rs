use thiserror::Error;

use coffee_core::DomainError;
use coffee_inventory::LedgerError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown top-level action or buy selection.
    #[error("Unknown command: {0}")]
    InvalidCommand(String),

    /// A quantity prompt received something other than an integer.
    #[error("Not a whole number: {0}")]
    InvalidNumericInput(String),

    #[error("Quantity cannot be negative: {0}")]
    NegativeQuantity(i64),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether the loop can report this and prompt again.
    ///
    /// Only a broken reader/writer ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CliError::Io(_))
    }
}
