//! A single supply pile.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardDefinition};

/// One catalog definition and how many copies are left.
///
/// The count only ever goes down, by one per successful `take`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyPile {
    definition: CardDefinition,
    remaining: u32,
}

impl SupplyPile {
    /// A full pile holding the definition's catalog quantity.
    #[must_use]
    pub fn new(definition: CardDefinition) -> Self {
        let remaining = definition.quantity;
        Self {
            definition,
            remaining,
        }
    }

    /// A pile with an explicit starting count.
    #[must_use]
    pub fn with_count(definition: CardDefinition, remaining: u32) -> Self {
        Self {
            definition,
            remaining,
        }
    }

    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Remove one copy. `None` leaves the pile untouched.
    pub fn take(&mut self) -> Option<Card> {
        self.remaining = self.remaining.checked_sub(1)?;
        Some(self.definition.instantiate())
    }
}
