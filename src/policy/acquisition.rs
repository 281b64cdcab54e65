//! Acquisition policies.
//!
//! A policy looks at the active player's resource units and the supply and
//! names at most one card to acquire. The acquisition phase asks again after
//! every successful acquisition, so a policy never needs to plan ahead.

use crate::cards::{CardCatalog, CardCategory, CardDefinition};
use crate::supply::Supply;

/// Chooses the next card to acquire.
///
/// Implementations must be deterministic: the same resources and supply
/// state always give the same answer.
pub trait AcquisitionPolicy: Send + Sync {
    /// The card to try next, or `None` to end the acquisition phase.
    fn choose<'s>(&self, resource_units: u32, supply: &'s Supply) -> Option<&'s CardDefinition>;
}

/// Fixed-priority greedy buyer.
///
/// Walks its priority list in order and picks the first card that is both
/// affordable and still in the supply. There is no lookahead.
///
/// ```
/// use deckbuilder::cards::CardCatalog;
/// use deckbuilder::policy::{AcquisitionPolicy, GreedyPolicy};
/// use deckbuilder::supply::Supply;
///
/// let catalog = CardCatalog::standard();
/// let supply = Supply::from_catalog(&catalog);
/// let policy = GreedyPolicy::from_catalog(&catalog);
///
/// assert_eq!(policy.choose(8, &supply).unwrap().name, "Framework");
/// assert_eq!(policy.choose(4, &supply).unwrap().name, "Ethereum");
/// assert_eq!(policy.choose(0, &supply).unwrap().name, "Bitcoin");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreedyPolicy {
    priority: Vec<String>,
}

impl GreedyPolicy {
    /// Capstone first, then resource cards from most to least expensive.
    ///
    /// Equal-cost resource cards keep catalog order.
    #[must_use]
    pub fn from_catalog(catalog: &CardCatalog) -> Self {
        let capstone = catalog.capstone();

        let mut resources: Vec<&CardDefinition> = catalog
            .find_by_category(CardCategory::Resource)
            .filter(|def| capstone.map_or(true, |c| c.name != def.name))
            .collect();
        resources.sort_by(|a, b| b.cost.cmp(&a.cost));

        let priority = capstone
            .into_iter()
            .chain(resources)
            .map(|def| def.name.clone())
            .collect();
        Self { priority }
    }

    /// An explicit priority list, tried front to back.
    pub fn with_priority<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            priority: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn priority(&self) -> &[String] {
        &self.priority
    }
}

impl AcquisitionPolicy for GreedyPolicy {
    fn choose<'s>(&self, resource_units: u32, supply: &'s Supply) -> Option<&'s CardDefinition> {
        self.priority
            .iter()
            .filter(|name| supply.is_available(name))
            .filter_map(|name| supply.definition(name))
            .find(|def| def.cost <= resource_units)
    }
}
