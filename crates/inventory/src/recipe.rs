use serde::{Deserialize, Serialize};

use coffee_core::ValueObject;

use crate::resource::Resource;

/// Cups consumed by any purchase, regardless of recipe.
pub const CUPS_PER_DRINK: i64 = 1;

/// One of the fixed drinks the machine can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recipe {
    Espresso,
    Latte,
    Cappuccino,
}

/// Resources and price of a single drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    pub water: i64,
    pub milk: i64,
    pub beans: i64,
    pub cost: i64,
}

impl ValueObject for Requirements {}

impl Requirements {
    /// Amount of `resource` a purchase needs on hand.
    pub fn quantity(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Water => self.water,
            Resource::Milk => self.milk,
            Resource::Beans => self.beans,
            Resource::Cups => CUPS_PER_DRINK,
        }
    }
}

impl Recipe {
    /// Menu order.
    pub const ALL: [Recipe; 3] = [Recipe::Espresso, Recipe::Latte, Recipe::Cappuccino];

    pub fn requirements(self) -> Requirements {
        match self {
            Recipe::Espresso => Requirements {
                water: 250,
                milk: 0,
                beans: 16,
                cost: 4,
            },
            Recipe::Latte => Requirements {
                water: 350,
                milk: 75,
                beans: 20,
                cost: 7,
            },
            Recipe::Cappuccino => Requirements {
                water: 200,
                milk: 100,
                beans: 12,
                cost: 6,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Recipe::Espresso => "espresso",
            Recipe::Latte => "latte",
            Recipe::Cappuccino => "cappuccino",
        }
    }
}

impl core::fmt::Display for Recipe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
