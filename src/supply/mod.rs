//! Shared supply of acquirable cards.
//!
//! ## Key Types
//!
//! - `SupplyPile`: one definition and its remaining count
//! - `Supply`: all piles, availability queries, and the game-over predicate
//! - `EndReason`: which end condition fired

pub mod kingdom;
pub mod pile;

pub use kingdom::{EndReason, Supply, EMPTY_PILES_TO_END};
pub use pile::SupplyPile;
