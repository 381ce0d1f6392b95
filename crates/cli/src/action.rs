use core::str::FromStr;

use coffee_inventory::Recipe;

use crate::error::CliError;

/// Top-level actions, in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy,
    Take,
    Fill,
    Remaining,
    Exit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Buy,
        Action::Take,
        Action::Fill,
        Action::Remaining,
        Action::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Buy => "buy",
            Action::Take => "take",
            Action::Fill => "fill",
            Action::Remaining => "remaining",
            Action::Exit => "exit",
        }
    }

    /// "buy, take, fill, remaining, exit"
    pub fn menu() -> String {
        Self::ALL.map(Action::name).join(", ")
    }
}

impl FromStr for Action {
    type Err = CliError;

    /// Case-insensitive match against [`Action::ALL`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(input))
            .ok_or_else(|| CliError::InvalidCommand(input.to_string()))
    }
}

/// Answer to the buy sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuySelection {
    Drink(Recipe),
    Back,
}

impl BuySelection {
    /// "1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu"
    pub fn menu() -> String {
        let mut entries: Vec<String> = Recipe::ALL
            .iter()
            .enumerate()
            .map(|(i, recipe)| format!("{} - {}", i + 1, recipe.name()))
            .collect();
        entries.push("back - to main menu".to_string());
        entries.join(", ")
    }
}

impl FromStr for BuySelection {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.eq_ignore_ascii_case("back") {
            return Ok(BuySelection::Back);
        }

        // Exact menu numbers only: "01" and "+1" are not "1".
        Recipe::ALL
            .into_iter()
            .enumerate()
            .find(|(i, _)| (i + 1).to_string() == input)
            .map(|(_, recipe)| BuySelection::Drink(recipe))
            .ok_or_else(|| CliError::InvalidCommand(input.to_string()))
    }
}

/// Parse a refill quantity: a non-negative integer.
pub fn parse_quantity(input: &str) -> Result<i64, CliError> {
    let input = input.trim();
    let value: i64 = input
        .parse()
        .map_err(|_| CliError::InvalidNumericInput(input.to_string()))?;
    if value < 0 {
        return Err(CliError::NegativeQuantity(value));
    }
    Ok(value)
}
