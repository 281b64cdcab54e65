//! The card catalog: every card kind the supply can hold.
//!
//! Built once at startup and read-only afterwards. Lookups go through a
//! keyed table on the lower-cased name, so `"bitcoin"` and `"BITCOIN"` both
//! find `Bitcoin`.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{Card, CardCategory, CardDefinition, CardId};
use crate::core::StarterEntry;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card `{0}` is already in the catalog")]
    DuplicateName(String),

    #[error("card `{0}` has a supply quantity of zero")]
    ZeroQuantity(String),

    #[error("catalog has no cards")]
    Empty,

    #[error("invalid catalog table: {0}")]
    Parse(#[from] serde_json::Error),
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

/// Registry of card definitions in registration order.
///
/// ## Example
///
/// ```
/// use deckbuilder::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
/// let bitcoin = catalog.get("BITCOIN").unwrap();
/// assert_eq!(bitcoin.name, "Bitcoin");
/// assert_eq!(catalog.capstone().unwrap().name, "Framework");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    by_name: FxHashMap<String, CardId>,
}

impl CardCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical six-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        use CardCategory::{Resource, Utility};

        let mut catalog = Self::new();
        for def in [
            CardDefinition::new("Method", Utility, 2, 1, 14),
            CardDefinition::new("Module", Utility, 5, 3, 8),
            CardDefinition::new("Framework", Utility, 8, 6, 8),
            CardDefinition::new("Bitcoin", Resource, 0, 1, 60),
            CardDefinition::new("Ethereum", Resource, 3, 2, 40),
            CardDefinition::new("Dogecoin", Resource, 6, 3, 30),
        ] {
            let id = CardId::new(catalog.cards.len() as u32);
            catalog.by_name.insert(key(&def.name), id);
            catalog.cards.push(def);
        }
        catalog
    }

    /// Build a catalog from definitions, rejecting duplicates and empty piles.
    pub fn from_definitions(
        defs: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for def in defs {
            catalog.register(def)?;
        }
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let defs: Vec<CardDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(defs)
    }

    /// Add a definition. Names are unique ignoring case.
    pub fn register(&mut self, card: CardDefinition) -> Result<CardId, CatalogError> {
        let k = key(&card.name);
        if self.by_name.contains_key(&k) {
            return Err(CatalogError::DuplicateName(card.name));
        }
        if card.quantity == 0 {
            return Err(CatalogError::ZeroQuantity(card.name));
        }

        let id = CardId::new(self.cards.len() as u32);
        self.by_name.insert(k, id);
        self.cards.push(card);
        Ok(id)
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.id_of(name).map(|id| &self.cards[id.index()])
    }

    #[must_use]
    pub fn get_by_id(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(id.index())
    }

    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<CardId> {
        self.by_name.get(&key(name)).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.id_of(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    pub fn find_by_category(&self, category: CardCategory) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(move |c| c.category == category)
    }

    /// The highest-cost definition; the earliest registered wins a tie.
    #[must_use]
    pub fn capstone(&self) -> Option<&CardDefinition> {
        highest_cost(self.cards.iter())
    }

    /// A fresh card of the named kind.
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Option<Card> {
        self.get(name).map(CardDefinition::instantiate)
    }

    /// Expand `(name, count)` entries into cards. Unknown names are skipped.
    #[must_use]
    pub fn build_cards(&self, entries: &[StarterEntry]) -> Vec<Card> {
        entries
            .iter()
            .filter_map(|entry| self.get(&entry.name).map(|def| (def, entry.count)))
            .flat_map(|(def, count)| std::iter::repeat_with(|| def.instantiate()).take(count))
            .collect()
    }
}

/// First definition with the strictly greatest cost.
fn highest_cost<'a>(
    defs: impl Iterator<Item = &'a CardDefinition>,
) -> Option<&'a CardDefinition> {
    defs.fold(None, |best: Option<&CardDefinition>, def| match best {
        Some(b) if b.cost >= def.cost => Some(b),
        _ => Some(def),
    })
}
