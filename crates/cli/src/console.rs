//! The read-eval loop.
//!
//! Two prompt levels: the main action menu, and the sub-prompts of `buy` and
//! `fill`. Bad input at any level is reported and asked for again; only a
//! failing reader/writer ends the session early.

use std::io::{BufRead, Write};

use coffee_inventory::{InventoryLedger, Recipe, Refill, Resource};

use crate::action::{Action, BuySelection, parse_quantity};
use crate::error::{CliError, CliResult};

const COFFEE_READY: &str = "I have enough resources, making you a coffee!";

/// What the main loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Drives an [`InventoryLedger`] from line-oriented input.
pub struct CommandLoop<R, W> {
    ledger: InventoryLedger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CommandLoop<R, W> {
    pub fn new(ledger: InventoryLedger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    /// Run until `exit` or end of input, then hand the ledger back.
    pub fn run(mut self) -> CliResult<InventoryLedger> {
        let prompt = format!("Write action ({}): ", Action::menu());

        loop {
            let Some(line) = self.prompt(&prompt)? else {
                tracing::debug!("input closed");
                break;
            };

            let flow = match line.parse::<Action>() {
                Ok(action) => {
                    tracing::debug!(action = action.name(), "dispatching action");
                    self.dispatch(action)
                }
                Err(err) => Err(err),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.is_recoverable() => self.report(&err)?,
                Err(err) => return Err(err),
            }
        }

        Ok(self.ledger)
    }

    fn dispatch(&mut self, action: Action) -> CliResult<Flow> {
        match action {
            Action::Buy => self.buy(),
            Action::Take => {
                let amount = self.ledger.withdraw();
                tracing::info!(amount, "cash withdrawn");
                self.say(&format!("I gave you ${amount}"))?;
                Ok(Flow::Continue)
            }
            Action::Fill => self.fill(),
            Action::Remaining => {
                let report = self.ledger.snapshot();
                self.say(&report)?;
                Ok(Flow::Continue)
            }
            Action::Exit => Ok(Flow::Exit),
        }
    }

    fn buy(&mut self) -> CliResult<Flow> {
        let prompt = format!("What do you want to buy? {}: ", BuySelection::menu());
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(Flow::Exit);
        };

        let recipe = match line.parse::<BuySelection>()? {
            BuySelection::Drink(recipe) => recipe,
            BuySelection::Back => return Ok(Flow::Continue),
        };

        self.make(recipe)?;
        Ok(Flow::Continue)
    }

    fn make(&mut self, recipe: Recipe) -> CliResult<()> {
        match self.ledger.purchase(recipe)?.shortage() {
            None => {
                tracing::info!(recipe = recipe.name(), "coffee dispensed");
                self.say(COFFEE_READY)
            }
            Some(resource) => {
                tracing::info!(
                    recipe = recipe.name(),
                    resource = resource.name(),
                    "purchase rejected"
                );
                self.say(&format!("Sorry, not enough {resource}!"))
            }
        }
    }

    fn fill(&mut self) -> CliResult<Flow> {
        let mut amounts = [0i64; 4];
        for (slot, resource) in amounts.iter_mut().zip(Resource::ALL) {
            match self.read_quantity(fill_prompt(resource))? {
                Some(amount) => *slot = amount,
                None => return Ok(Flow::Exit),
            }
        }

        let [water, milk, beans, cups] = amounts;
        self.ledger.refill(Refill::new(water, milk, beans, cups))?;
        tracing::info!(water, milk, beans, cups, "machine restocked");
        Ok(Flow::Continue)
    }

    /// Ask until a valid quantity arrives. `None` on end of input.
    fn read_quantity(&mut self, prompt: &str) -> CliResult<Option<i64>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse_quantity(&line) {
                Ok(amount) => return Ok(Some(amount)),
                Err(err) => self.report(&err)?,
            }
        }
    }

    /// Write `text` without a newline and read one trimmed line.
    fn prompt(&mut self, text: &str) -> CliResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn report(&mut self, err: &CliError) -> CliResult<()> {
        tracing::warn!(error = %err, "input rejected");
        self.say(&err.to_string())
    }
}

fn fill_prompt(resource: Resource) -> &'static str {
    match resource {
        Resource::Water => "Write how many ml of water do you want to add: ",
        Resource::Milk => "Write how many ml of milk do you want to add: ",
        Resource::Beans => "Write how many grams of coffee beans do you want to add: ",
        Resource::Cups => "Write how many disposable cups of coffee do you want to add: ",
    }
}
