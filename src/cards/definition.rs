//! Card definitions and card instances.
//!
//! `CardDefinition` is one row of the static catalog: name, category, cost,
//! value and how many copies the supply starts with. `Card` is what players
//! actually hold. Cards are value objects: two cards with the same
//! (category, name, cost, value) are interchangeable.

use serde::{Deserialize, Serialize};

/// Position of a definition in its catalog, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    /// Played automatically during resource generation for `value` units.
    Resource,
    /// Stays in hand; only counts at scoring.
    Utility,
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardCategory::Resource => f.write_str("RESOURCE"),
            CardCategory::Utility => f.write_str("UTILITY"),
        }
    }
}

/// Immutable catalog entry.
///
/// ```
/// use deckbuilder::cards::{CardCategory, CardDefinition};
///
/// let gold = CardDefinition::new("Dogecoin", CardCategory::Resource, 6, 3, 30);
/// let card = gold.instantiate();
/// assert_eq!(card.resource_value(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique key; matched case-insensitively.
    pub name: String,

    pub category: CardCategory,

    /// Resource units needed to acquire one copy.
    pub cost: u32,

    /// Resource units produced when played (resource cards), and score
    /// points at the end of the game (all cards).
    pub value: u32,

    /// Copies in the supply at setup. Must be positive.
    pub quantity: u32,
}

impl CardDefinition {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: CardCategory,
        cost: u32,
        value: u32,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            cost,
            value,
            quantity,
        }
    }

    /// Create a fresh card of this kind.
    #[must_use]
    pub fn instantiate(&self) -> Card {
        Card {
            name: self.name.clone(),
            category: self.category,
            cost: self.cost,
            value: self.value,
        }
    }

    #[must_use]
    pub fn is_resource(&self) -> bool {
        self.category == CardCategory::Resource
    }
}

/// A card held by a player (in a deck, hand, or in play).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: String,
    category: CardCategory,
    cost: u32,
    value: u32,
}

impl Card {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> CardCategory {
        self.category
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Score contribution.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn is_resource(&self) -> bool {
        self.category == CardCategory::Resource
    }

    /// Resource units this card produces when played; 0 for utility cards.
    #[must_use]
    pub fn resource_value(&self) -> u32 {
        if self.is_resource() {
            self.value
        } else {
            0
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, cost {}, value {})", self.name, self.category, self.cost, self.value)
    }
}
