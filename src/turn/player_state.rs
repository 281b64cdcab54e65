//! Player state and the turn state machine.
//!
//! A turn moves through four phases, each entered by the orchestrator
//! calling the matching method in order:
//!
//! ```text
//! Idle --start_turn--> ResourceGeneration --generate_resources--> Acquisition
//!   ^                                                                  |
//!   +--------draw_next_hand-------- Cleanup <--------end_turn----------+
//! ```
//!
//! `acquire` is the only operation that touches the shared `Supply`. It is
//! check-then-mutate: on failure nothing changes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::cards::Card;
use crate::deck::PersonalDeck;
use crate::supply::Supply;

/// Hand and in-play storage; a normal hand fits inline.
pub type CardRow = SmallVec<[Card; 8]>;

/// Where a player is within their turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    Idle,
    ResourceGeneration,
    Acquisition,
    Cleanup,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnPhase::Idle => "idle",
            TurnPhase::ResourceGeneration => "resource generation",
            TurnPhase::Acquisition => "acquisition",
            TurnPhase::Cleanup => "cleanup",
        };
        f.write_str(name)
    }
}

/// Why an acquisition attempt failed. The player and supply are unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AcquireError {
    #[error("no acquisitions left this turn")]
    NoAllowance,

    #[error("`{name}` is not available in the supply")]
    NotAvailable { name: String },

    #[error("`{name}` costs {cost} but only {available} resource units are available")]
    InsufficientResources {
        name: String,
        cost: u32,
        available: u32,
    },
}

/// Everything one player owns during a game.
#[derive(Clone, Debug)]
pub struct PlayerState {
    name: String,
    deck: PersonalDeck,
    hand: CardRow,
    in_play: CardRow,
    resource_units: u32,
    acquisitions_remaining: u32,
    acquisitions_per_turn: u32,
    phase: TurnPhase,
}

impl PlayerState {
    /// A player with an empty hand. Draw the opening hand separately.
    pub fn new(name: impl Into<String>, deck: PersonalDeck) -> Self {
        Self {
            name: name.into(),
            deck,
            hand: CardRow::new(),
            in_play: CardRow::new(),
            resource_units: 0,
            acquisitions_remaining: 0,
            acquisitions_per_turn: 1,
            phase: TurnPhase::Idle,
        }
    }

    /// Override the per-turn acquisition allowance (default 1).
    #[must_use]
    pub fn with_acquisitions_per_turn(mut self, allowance: u32) -> Self {
        self.acquisitions_per_turn = allowance;
        self
    }

    // === Turn phases ===

    /// Reset per-turn counters and enter resource generation.
    pub fn start_turn(&mut self) {
        self.resource_units = 0;
        self.acquisitions_remaining = self.acquisitions_per_turn;
        self.phase = TurnPhase::ResourceGeneration;
    }

    /// Play every resource card in hand at once and enter acquisition.
    ///
    /// Utility cards stay in hand. Returns the units generated.
    pub fn generate_resources(&mut self) -> u32 {
        let (resources, kept): (CardRow, CardRow) =
            self.hand.drain(..).partition(Card::is_resource);
        self.hand = kept;

        let generated: u32 = resources.iter().map(Card::resource_value).sum();
        self.in_play.extend(resources);
        self.resource_units += generated;
        self.phase = TurnPhase::Acquisition;
        generated
    }

    /// Try to acquire one copy of `name` from the supply.
    ///
    /// On success the new card goes to the discard pile, its cost is paid
    /// and one acquisition is used. On failure nothing changes.
    pub fn acquire(&mut self, supply: &mut Supply, name: &str) -> Result<Card, AcquireError> {
        if self.acquisitions_remaining == 0 {
            return Err(AcquireError::NoAllowance);
        }

        let not_available = || AcquireError::NotAvailable {
            name: name.to_string(),
        };

        if !supply.is_available(name) {
            return Err(not_available());
        }
        let cost = supply.definition(name).ok_or_else(not_available)?.cost;
        if self.resource_units < cost {
            return Err(AcquireError::InsufficientResources {
                name: name.to_string(),
                cost,
                available: self.resource_units,
            });
        }

        let card = supply.take(name).ok_or_else(not_available)?;
        self.resource_units -= cost;
        self.acquisitions_remaining -= 1;
        self.deck.discard(card.clone());

        debug!(
            player = %self.name,
            card = card.name(),
            cost,
            left_in_supply = supply.remaining(name),
            "acquired card"
        );
        Ok(card)
    }

    /// Discard the hand and everything in play, entering cleanup.
    pub fn end_turn(&mut self) {
        for card in self.hand.drain(..).chain(self.in_play.drain(..)) {
            self.deck.discard(card);
        }
        self.phase = TurnPhase::Cleanup;
    }

    /// Draw the next hand and go idle. Returns the number of cards drawn,
    /// which may be less than `hand_size` for a small deck.
    pub fn draw_next_hand(&mut self, hand_size: usize) -> usize {
        let drawn = self.draw_cards(hand_size);
        self.phase = TurnPhase::Idle;
        drawn
    }

    // === Card movement ===

    /// Draw one card into hand. False if the deck is empty.
    pub fn draw_card(&mut self) -> bool {
        match self.deck.draw_one() {
            Some(card) => {
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    /// Draw up to `n` cards into hand; returns how many were drawn.
    pub fn draw_cards(&mut self, n: usize) -> usize {
        let drawn = self.deck.draw_many(n);
        let count = drawn.len();
        self.hand.extend(drawn);
        count
    }

    /// Move the hand card at `index` into play.
    pub fn play_card(&mut self, index: usize) -> Option<&Card> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.in_play.push(card);
        self.in_play.last()
    }

    /// Move the hand card at `index` straight to the discard pile.
    ///
    /// Returns a copy of the discarded card, or `None` for a bad index.
    pub fn discard_from_hand(&mut self, index: usize) -> Option<Card> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.deck.discard(card.clone());
        Some(card)
    }

    pub fn add_resources(&mut self, amount: u32) {
        self.resource_units += amount;
    }

    // === Queries ===

    /// Sum of values over hand, in-play, and both deck piles.
    #[must_use]
    pub fn score(&self) -> u32 {
        let held: u32 = self
            .hand
            .iter()
            .chain(self.in_play.iter())
            .map(Card::value)
            .sum();
        held + self.deck.total_value()
    }

    /// Cards owned in every zone.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand.len() + self.in_play.len() + self.deck.total_cards()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn in_play(&self) -> &[Card] {
        &self.in_play
    }

    #[must_use]
    pub fn resource_units(&self) -> u32 {
        self.resource_units
    }

    #[must_use]
    pub fn acquisitions_remaining(&self) -> u32 {
        self.acquisitions_remaining
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn deck(&self) -> &PersonalDeck {
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;
    use crate::core::{GameRng, StarterEntry};

    fn player_with(entries: &[StarterEntry]) -> PlayerState {
        let catalog = CardCatalog::standard();
        let deck = PersonalDeck::new(catalog.build_cards(entries), GameRng::new(7));
        PlayerState::new("Tester", deck)
    }

    fn starter_player() -> PlayerState {
        player_with(&[StarterEntry::new("Bitcoin", 7), StarterEntry::new("Method", 3)])
    }

    #[test]
    fn test_opening_hand() {
        let mut player = starter_player();
        assert_eq!(player.draw_cards(5), 5);
        assert_eq!(player.hand_size(), 5);
        assert_eq!(player.deck().draw_len(), 5);
        assert_eq!(player.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_start_turn_resets_counters() {
        let mut player = starter_player();
        player.add_resources(4);
        player.start_turn();

        assert_eq!(player.resource_units(), 0);
        assert_eq!(player.acquisitions_remaining(), 1);
        assert_eq!(player.phase(), TurnPhase::ResourceGeneration);
    }

    #[test]
    fn test_generate_resources_plays_all_resource_cards() {
        let mut player = player_with(&[StarterEntry::new("Bitcoin", 7)]);
        player.draw_cards(7);
        player.start_turn();

        let generated = player.generate_resources();

        assert_eq!(generated, 7);
        assert_eq!(player.resource_units(), 7);
        assert_eq!(player.hand_size(), 0);
        assert_eq!(player.in_play().len(), 7);
        assert_eq!(player.phase(), TurnPhase::Acquisition);
    }

    #[test]
    fn test_generate_resources_keeps_utility_cards() {
        let mut player = player_with(&[StarterEntry::new("Method", 2), StarterEntry::new("Ethereum", 2)]);
        player.draw_cards(4);
        player.start_turn();

        assert_eq!(player.generate_resources(), 4);
        assert_eq!(player.hand_size(), 2);
        assert!(player.hand().iter().all(|c| c.name() == "Method"));
    }

    #[test]
    fn test_acquire_success() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::from_catalog(&catalog);
        let mut player = starter_player();
        player.start_turn();
        player.add_resources(5);

        let card = player.acquire(&mut supply, "Ethereum").unwrap();

        assert_eq!(card.name(), "Ethereum");
        assert_eq!(player.resource_units(), 2);
        assert_eq!(player.acquisitions_remaining(), 0);
        assert_eq!(supply.remaining("Ethereum"), 39);
        assert_eq!(player.deck().discard_pile(), &[card]);
        assert_eq!(player.hand_size(), 0);
    }

    #[test]
    fn test_acquire_insufficient_resources_changes_nothing() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::from_catalog(&catalog);
        let mut player = starter_player();
        player.start_turn();
        player.add_resources(2);

        let err = player.acquire(&mut supply, "Ethereum").unwrap_err();

        assert_eq!(
            err,
            AcquireError::InsufficientResources {
                name: "Ethereum".to_string(),
                cost: 3,
                available: 2,
            }
        );
        assert_eq!(player.resource_units(), 2);
        assert_eq!(player.acquisitions_remaining(), 1);
        assert_eq!(supply.remaining("Ethereum"), 40);
        assert_eq!(player.deck().discard_len(), 0);
    }

    #[test]
    fn test_acquire_without_allowance() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::from_catalog(&catalog);
        let mut player = starter_player();
        player.start_turn();
        player.add_resources(10);

        player.acquire(&mut supply, "Bitcoin").unwrap();
        let err = player.acquire(&mut supply, "Bitcoin").unwrap_err();

        assert_eq!(err, AcquireError::NoAllowance);
        assert_eq!(supply.remaining("Bitcoin"), 59);
        assert_eq!(player.resource_units(), 10);
    }

    #[test]
    fn test_acquire_unknown_name_is_not_available() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::from_catalog(&catalog);
        let mut player = starter_player();
        player.start_turn();

        let err = player.acquire(&mut supply, "Litecoin").unwrap_err();
        assert!(matches!(err, AcquireError::NotAvailable { .. }));
        assert_eq!(player.acquisitions_remaining(), 1);
    }

    #[test]
    fn test_acquire_empty_pile() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::with_quantities(&catalog, &[("Bitcoin", 0)]);
        let mut player = starter_player();
        player.start_turn();

        assert_eq!(
            player.acquire(&mut supply, "Bitcoin").unwrap_err(),
            AcquireError::NotAvailable {
                name: "Bitcoin".to_string()
            }
        );
    }

    #[test]
    fn test_multiple_acquisitions_when_allowed() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::from_catalog(&catalog);
        let mut player = starter_player().with_acquisitions_per_turn(2);
        player.start_turn();
        player.add_resources(6);

        player.acquire(&mut supply, "Ethereum").unwrap();
        player.acquire(&mut supply, "Ethereum").unwrap();
        assert_eq!(player.resource_units(), 0);
        assert_eq!(
            player.acquire(&mut supply, "Bitcoin").unwrap_err(),
            AcquireError::NoAllowance
        );
    }

    #[test]
    fn test_end_turn_discards_everything() {
        let mut player = starter_player();
        player.draw_cards(5);
        player.start_turn();
        player.generate_resources();

        player.end_turn();

        assert_eq!(player.phase(), TurnPhase::Cleanup);
        assert_eq!(player.hand_size(), 0);
        assert!(player.in_play().is_empty());
        assert_eq!(player.deck().discard_len(), 5);
        assert_eq!(player.total_cards(), 10);

        assert_eq!(player.draw_next_hand(5), 5);
        assert_eq!(player.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_draw_next_hand_with_small_deck() {
        let mut player = player_with(&[StarterEntry::new("Bitcoin", 3)]);
        player.draw_cards(5);
        player.start_turn();
        player.generate_resources();
        player.end_turn();

        assert_eq!(player.draw_next_hand(5), 3);
        assert!(!player.draw_card());
    }

    #[test]
    fn test_play_card_by_index() {
        let mut player = starter_player();
        player.draw_cards(2);

        assert!(player.play_card(5).is_none());
        let played = player.play_card(0).cloned().unwrap();
        assert_eq!(player.in_play(), &[played]);
        assert_eq!(player.hand_size(), 1);
    }

    #[test]
    fn test_discard_from_hand() {
        let mut player = starter_player();
        player.draw_cards(3);
        let second = player.hand()[1].clone();

        assert!(player.discard_from_hand(3).is_none());
        assert_eq!(player.hand_size(), 3);

        assert_eq!(player.discard_from_hand(1), Some(second.clone()));
        assert_eq!(player.hand_size(), 2);
        assert_eq!(player.deck().discard_pile(), &[second]);
        assert!(player.in_play().is_empty());
        assert_eq!(player.total_cards(), 10);
    }

    #[test]
    fn test_score_counts_every_zone() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::from_catalog(&catalog);
        let mut player = starter_player();
        player.draw_cards(5);
        player.start_turn();
        player.generate_resources();
        player.add_resources(8);

        assert_eq!(player.score(), 10);
        player.acquire(&mut supply, "Framework").unwrap();
        assert_eq!(player.score(), 16);

        player.end_turn();
        player.draw_next_hand(5);
        assert_eq!(player.score(), 16);
    }

    #[test]
    fn test_acquire_error_messages() {
        assert_eq!(AcquireError::NoAllowance.to_string(), "no acquisitions left this turn");
        let err = AcquireError::InsufficientResources {
            name: "Module".to_string(),
            cost: 5,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "`Module` costs 5 but only 1 resource units are available"
        );
    }
}
