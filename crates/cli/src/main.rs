use std::io;

use anyhow::Context;

use coffee_cli::{CommandLoop, MachineConfig};
use coffee_inventory::InventoryLedger;

fn main() -> anyhow::Result<()> {
    let config = MachineConfig::from_env().context("failed to load machine configuration")?;
    coffee_observability::init(&config.log);

    let ledger = InventoryLedger::with_levels(config.initial_stock)
        .context("invalid initial stock")?;
    tracing::info!(stock = ?config.initial_stock, "coffee machine ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let ledger = CommandLoop::new(ledger, stdin.lock(), stdout.lock())
        .run()
        .context("session aborted")?;

    tracing::info!(stock = ?ledger.levels(), "coffee machine switched off");
    Ok(())
}
