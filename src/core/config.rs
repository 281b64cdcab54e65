//! Game configuration.
//!
//! `GameConfig` describes everything the setup step needs besides the card
//! catalog: seat count, opening hand size, the starter deck, per-turn
//! acquisition allowance, an optional turn cap, and the RNG seed.
//!
//! It is plain data and round-trips through serde, so a runner can load it
//! from a file or build it with the `with_*` methods.

use serde::{Deserialize, Serialize};

/// Default opening hand size.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// One line of the starter deck: `count` copies of the catalog card `name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterEntry {
    pub name: String,
    pub count: usize,
}

impl StarterEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Setup configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Cards drawn for the opening hand and after every cleanup.
    pub hand_size: usize,

    /// Starter deck composition, identical for every player.
    pub starter_deck: Vec<StarterEntry>,

    /// Acquisitions allowed per turn.
    pub acquisitions_per_turn: u32,

    /// Stop after this many player-turns even if the supply is not exhausted.
    /// `None` runs until the supply ends the game.
    pub max_turns: Option<u32>,

    /// Shuffle seed. `None` seeds from process entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            hand_size: DEFAULT_HAND_SIZE,
            starter_deck: vec![StarterEntry::new("Bitcoin", 7), StarterEntry::new("Method", 3)],
            acquisitions_per_turn: 1,
            max_turns: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Replace the starter deck.
    #[must_use]
    pub fn with_starter_deck(mut self, entries: Vec<StarterEntry>) -> Self {
        self.starter_deck = entries;
        self
    }

    #[must_use]
    pub fn with_acquisitions_per_turn(mut self, allowance: u32) -> Self {
        self.acquisitions_per_turn = allowance;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total cards each player starts with.
    #[must_use]
    pub fn starter_deck_size(&self) -> usize {
        self.starter_deck.iter().map(|e| e.count).sum()
    }
}
