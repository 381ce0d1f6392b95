use serde::{Deserialize, Serialize};

/// A consumable tracked by the ledger.
///
/// Variant order is the order in which a purchase checks for shortages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Water,
    Milk,
    Beans,
    Cups,
}

impl Resource {
    /// Every resource, in check order.
    pub const ALL: [Resource; 4] = [
        Resource::Water,
        Resource::Milk,
        Resource::Beans,
        Resource::Cups,
    ];

    /// Name used in user-facing messages ("Sorry, not enough milk!").
    pub fn name(self) -> &'static str {
        match self {
            Resource::Water => "water",
            Resource::Milk => "milk",
            Resource::Beans => "beans",
            Resource::Cups => "cups",
        }
    }
}

impl core::fmt::Display for Resource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
