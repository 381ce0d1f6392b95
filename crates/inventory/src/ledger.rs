use serde::{Deserialize, Serialize};
use thiserror::Error;

use coffee_core::{Aggregate, DomainError, DomainResult, ValueObject};

use crate::recipe::{CUPS_PER_DRINK, Recipe};
use crate::resource::Resource;

/// Quantities held by the machine, plus the cash box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockLevels {
    pub money: i64,
    pub water: i64,
    pub milk: i64,
    pub beans: i64,
    pub cups: i64,
}

impl ValueObject for StockLevels {}

impl Default for StockLevels {
    /// Factory state of a freshly installed machine.
    fn default() -> Self {
        Self {
            money: 550,
            water: 400,
            milk: 540,
            beans: 120,
            cups: 9,
        }
    }
}

impl StockLevels {
    pub fn quantity(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Water => self.water,
            Resource::Milk => self.milk,
            Resource::Beans => self.beans,
            Resource::Cups => self.cups,
        }
    }

    fn quantity_mut(&mut self, resource: Resource) -> &mut i64 {
        match resource {
            Resource::Water => &mut self.water,
            Resource::Milk => &mut self.milk,
            Resource::Beans => &mut self.beans,
            Resource::Cups => &mut self.cups,
        }
    }
}

impl core::fmt::Display for StockLevels {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "The coffee machine has:")?;
        writeln!(f, "{} of water", self.water)?;
        writeln!(f, "{} of milk", self.milk)?;
        writeln!(f, "{} of coffee beans", self.beans)?;
        writeln!(f, "{} of disposable cups", self.cups)?;
        write!(f, "${} of money", self.money)
    }
}

/// Quantities to add in a single restock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refill {
    pub water: i64,
    pub milk: i64,
    pub beans: i64,
    pub cups: i64,
}

impl ValueObject for Refill {}

impl Refill {
    pub fn new(water: i64, milk: i64, beans: i64, cups: i64) -> Self {
        Self {
            water,
            milk,
            beans,
            cups,
        }
    }

    pub fn quantity(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Water => self.water,
            Resource::Milk => self.milk,
            Resource::Beans => self.beans,
            Resource::Cups => self.cups,
        }
    }
}

/// Ledger failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A purchase guard failed; carries the first short resource in check order.
    #[error("not enough {0}")]
    Insufficient(Resource),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of a purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Success,
    InsufficientWater,
    InsufficientMilk,
    InsufficientBeans,
    InsufficientCups,
}

impl PurchaseOutcome {
    pub fn insufficient(resource: Resource) -> Self {
        match resource {
            Resource::Water => PurchaseOutcome::InsufficientWater,
            Resource::Milk => PurchaseOutcome::InsufficientMilk,
            Resource::Beans => PurchaseOutcome::InsufficientBeans,
            Resource::Cups => PurchaseOutcome::InsufficientCups,
        }
    }

    /// The resource that blocked the purchase, if any.
    pub fn shortage(self) -> Option<Resource> {
        match self {
            PurchaseOutcome::Success => None,
            PurchaseOutcome::InsufficientWater => Some(Resource::Water),
            PurchaseOutcome::InsufficientMilk => Some(Resource::Milk),
            PurchaseOutcome::InsufficientBeans => Some(Resource::Beans),
            PurchaseOutcome::InsufficientCups => Some(Resource::Cups),
        }
    }

    pub fn is_success(self) -> bool {
        self == PurchaseOutcome::Success
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCommand {
    Purchase(Recipe),
    Refill(Refill),
    Withdraw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    CoffeeDispensed { recipe: Recipe },
    Restocked(Refill),
    CashWithdrawn { amount: i64 },
}

impl LedgerEvent {
    /// Stable event name (e.g. "inventory.ledger.coffee_dispensed").
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::CoffeeDispensed { .. } => "inventory.ledger.coffee_dispensed",
            LedgerEvent::Restocked(_) => "inventory.ledger.restocked",
            LedgerEvent::CashWithdrawn { .. } => "inventory.ledger.cash_withdrawn",
        }
    }
}

/// The machine's single mutable record of resources and cash.
///
/// All mutation goes through [`purchase`](Self::purchase),
/// [`withdraw`](Self::withdraw) and [`refill`](Self::refill). Each one decides
/// first (`handle`) and mutates only once every guard has passed (`apply`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLedger {
    levels: StockLevels,
    version: u64,
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryLedger {
    /// A ledger at factory defaults.
    pub fn new() -> Self {
        Self {
            levels: StockLevels::default(),
            version: 0,
        }
    }

    /// A ledger starting from arbitrary (non-negative) levels.
    pub fn with_levels(levels: StockLevels) -> DomainResult<Self> {
        if levels.money < 0 {
            return Err(DomainError::validation("money cannot be negative"));
        }
        for resource in Resource::ALL {
            if levels.quantity(resource) < 0 {
                return Err(DomainError::validation(format!(
                    "{resource} cannot be negative"
                )));
            }
        }
        Ok(Self { levels, version: 0 })
    }

    /// Try to make one drink.
    ///
    /// Shortages are reported as outcomes and leave the ledger untouched; the
    /// error path is reserved for arithmetic overflow of the cash box.
    pub fn purchase(&mut self, recipe: Recipe) -> DomainResult<PurchaseOutcome> {
        match self.execute(&LedgerCommand::Purchase(recipe)) {
            Ok(_) => Ok(PurchaseOutcome::Success),
            Err(LedgerError::Insufficient(resource)) => Ok(PurchaseOutcome::insufficient(resource)),
            Err(LedgerError::Domain(err)) => Err(err),
        }
    }

    /// Empty the cash box, returning what it held.
    pub fn withdraw(&mut self) -> i64 {
        match self.execute(&LedgerCommand::Withdraw).as_deref() {
            Ok([LedgerEvent::CashWithdrawn { amount }]) => *amount,
            _ => 0,
        }
    }

    /// Add stock. Negative quantities are rejected and nothing is applied.
    pub fn refill(&mut self, refill: Refill) -> Result<(), LedgerError> {
        self.execute(&LedgerCommand::Refill(refill)).map(drop)
    }

    /// Human-readable report of every quantity.
    pub fn snapshot(&self) -> String {
        self.levels.to_string()
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }
}

impl Aggregate for InventoryLedger {
    type Command = LedgerCommand;
    type Event = LedgerEvent;
    type Error = LedgerError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            LedgerEvent::CoffeeDispensed { recipe } => {
                let needs = recipe.requirements();
                self.levels.water -= needs.water;
                self.levels.milk -= needs.milk;
                self.levels.beans -= needs.beans;
                self.levels.cups -= CUPS_PER_DRINK;
                self.levels.money += needs.cost;
            }
            LedgerEvent::Restocked(refill) => {
                for resource in Resource::ALL {
                    *self.levels.quantity_mut(resource) += refill.quantity(resource);
                }
            }
            LedgerEvent::CashWithdrawn { amount } => {
                self.levels.money -= amount;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LedgerCommand::Purchase(recipe) => self.handle_purchase(*recipe),
            LedgerCommand::Refill(refill) => self.handle_refill(refill),
            LedgerCommand::Withdraw => Ok(vec![LedgerEvent::CashWithdrawn {
                amount: self.levels.money,
            }]),
        }
    }
}

impl InventoryLedger {
    fn handle_purchase(&self, recipe: Recipe) -> Result<Vec<LedgerEvent>, LedgerError> {
        let needs = recipe.requirements();

        // First shortage wins: water, milk, beans, then cups.
        for resource in Resource::ALL {
            if self.levels.quantity(resource) < needs.quantity(resource) {
                return Err(LedgerError::Insufficient(resource));
            }
        }

        if self.levels.money.checked_add(needs.cost).is_none() {
            return Err(DomainError::invariant("money would overflow").into());
        }

        Ok(vec![LedgerEvent::CoffeeDispensed { recipe }])
    }

    fn handle_refill(&self, refill: &Refill) -> Result<Vec<LedgerEvent>, LedgerError> {
        for resource in Resource::ALL {
            let added = refill.quantity(resource);
            if added < 0 {
                return Err(DomainError::validation(format!(
                    "{resource} refill cannot be negative"
                ))
                .into());
            }
            if self.levels.quantity(resource).checked_add(added).is_none() {
                return Err(DomainError::invariant(format!("{resource} would overflow")).into());
            }
        }

        Ok(vec![LedgerEvent::Restocked(*refill)])
    }
}
