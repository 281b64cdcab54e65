//! The shared supply ("kingdom") and the end-of-game predicate.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::pile::SupplyPile;
use crate::cards::{Card, CardCatalog, CardDefinition};

/// Number of empty piles that ends the game.
pub const EMPTY_PILES_TO_END: usize = 3;

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The capstone pile ran out.
    CapstoneExhausted,
    /// At least `EMPTY_PILES_TO_END` piles ran out.
    PilesExhausted { empty: usize },
    /// The configured turn cap was reached first.
    TurnLimit,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::CapstoneExhausted => f.write_str("capstone pile exhausted"),
            EndReason::PilesExhausted { empty } => write!(f, "{empty} piles exhausted"),
            EndReason::TurnLimit => f.write_str("turn limit reached"),
        }
    }
}

/// One pile per definition, keyed by lower-cased name.
///
/// ```
/// use deckbuilder::cards::CardCatalog;
/// use deckbuilder::supply::Supply;
///
/// let mut supply = Supply::from_catalog(&CardCatalog::standard());
/// assert_eq!(supply.remaining("Framework"), 8);
///
/// let card = supply.take("framework").unwrap();
/// assert_eq!(card.name(), "Framework");
/// assert_eq!(supply.remaining("Framework"), 7);
/// assert!(!supply.is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct Supply {
    piles: Vec<SupplyPile>,
    by_name: FxHashMap<String, usize>,
    capstone: Option<usize>,
}

impl Supply {
    /// Every catalog definition at its full quantity.
    #[must_use]
    pub fn from_catalog(catalog: &CardCatalog) -> Self {
        Self::from_piles(
            catalog.iter().cloned().map(SupplyPile::new).collect(),
            catalog.capstone(),
        )
    }

    /// A subset of the catalog with explicit counts. Unknown names are skipped.
    ///
    /// The capstone is still the catalog's capstone. Leave it out and the
    /// supply can only end the game on empty piles.
    #[must_use]
    pub fn with_quantities(catalog: &CardCatalog, quantities: &[(&str, u32)]) -> Self {
        let piles = quantities
            .iter()
            .filter_map(|&(name, count)| {
                catalog
                    .get(name)
                    .map(|def| SupplyPile::with_count(def.clone(), count))
            })
            .collect();
        Self::from_piles(piles, catalog.capstone())
    }

    // Later piles with an already-seen name are dropped.
    fn from_piles(candidates: Vec<SupplyPile>, capstone: Option<&CardDefinition>) -> Self {
        let mut by_name = FxHashMap::default();
        let mut piles = Vec::with_capacity(candidates.len());
        for pile in candidates {
            let key = pile.name().to_lowercase();
            if by_name.contains_key(&key) {
                continue;
            }
            by_name.insert(key, piles.len());
            piles.push(pile);
        }

        let capstone =
            capstone.and_then(|def| by_name.get(&def.name.to_lowercase()).copied());

        Self {
            piles,
            by_name,
            capstone,
        }
    }

    fn pile(&self, name: &str) -> Option<&SupplyPile> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&i| &self.piles[i])
    }

    /// Take one copy of the named card.
    ///
    /// Returns `None`, with no side effects, when the pile is empty or the
    /// name is not in the supply.
    pub fn take(&mut self, name: &str) -> Option<Card> {
        let index = *self.by_name.get(&name.to_lowercase())?;
        self.piles[index].take()
    }

    /// True if the named pile has at least one copy. Unknown names are unavailable.
    #[must_use]
    pub fn is_available(&self, name: &str) -> bool {
        self.pile(name).is_some_and(|p| !p.is_empty())
    }

    /// Copies left; 0 for unknown names.
    #[must_use]
    pub fn remaining(&self, name: &str) -> u32 {
        self.pile(name).map_or(0, SupplyPile::remaining)
    }

    /// The definition behind a pile.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&CardDefinition> {
        self.pile(name).map(SupplyPile::definition)
    }

    /// The catalog's capstone, if this supply has a pile for it.
    #[must_use]
    pub fn capstone(&self) -> Option<&CardDefinition> {
        self.capstone.map(|i| self.piles[i].definition())
    }

    /// Number of empty piles, the capstone pile included.
    #[must_use]
    pub fn empty_pile_count(&self) -> usize {
        self.piles.iter().filter(|p| p.is_empty()).count()
    }

    /// Why the supply ends the game, if it does.
    ///
    /// The capstone check wins when both conditions hold. An empty capstone
    /// pile also counts toward the empty-pile tally.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.capstone.is_some_and(|i| self.piles[i].is_empty()) {
            return Some(EndReason::CapstoneExhausted);
        }

        let empty = self.empty_pile_count();
        (empty >= EMPTY_PILES_TO_END).then_some(EndReason::PilesExhausted { empty })
    }

    /// Game-over predicate, evaluated fresh from pile state on every call.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.end_reason().is_some()
    }

    /// Piles in catalog order, for display.
    pub fn piles(&self) -> impl Iterator<Item = &SupplyPile> {
        self.piles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }
}
