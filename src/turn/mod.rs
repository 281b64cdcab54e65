//! Per-player state and the turn phases.

pub mod player_state;

pub use player_state::{AcquireError, CardRow, PlayerState, TurnPhase};
