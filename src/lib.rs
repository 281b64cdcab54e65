//! # rust-deckbuilder
//!
//! A simulator for a small deck-building card game. Every player starts
//! with the same deck, draws a hand each turn, converts resource cards into
//! spending power and buys new cards from a shared supply. The game ends
//! when the capstone pile runs out or three piles are empty; the highest
//! total card value wins.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: seats are `PlayerId`s and per-player data lives in
//!    a `PlayerMap`. Nothing assumes two players.
//!
//! 2. **Deterministic**: all shuffling goes through a seeded `GameRng`, and
//!    each deck owns a forked stream, so a seed reproduces a whole game.
//!
//! 3. **Configuration Over Convention**: the catalog, starter deck, hand size
//!    and acquisition allowance are data, with the standard game as default.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration
//! - `cards`: card definitions, card instances and the catalog
//! - `supply`: shared supply piles and the end-of-game predicate
//! - `deck`: a player's draw and discard piles
//! - `turn`: per-player state and the turn phase machine
//! - `policy`: acquisition decisions
//! - `rules`: setup, the turn loop, scoring and results

pub mod core;
pub mod cards;
pub mod supply;
pub mod deck;
pub mod turn;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap, StarterEntry};

pub use crate::cards::{Card, CardCatalog, CardCategory, CardDefinition, CardId, CatalogError};

pub use crate::supply::{EndReason, Supply, SupplyPile};

pub use crate::deck::PersonalDeck;

pub use crate::turn::{AcquireError, PlayerState, TurnPhase};

pub use crate::policy::{AcquisitionPolicy, GreedyPolicy};

pub use crate::rules::{
    GameBuilder, GameEngine, GameReport, GameResult, SetupError, TurnSummary,
};
