//! Game orchestration.
//!
//! `GameBuilder` deals a game, `GameEngine` plays it turn by turn, and a
//! finished game is summarised as a `GameReport` carrying a `GameResult`.
//! A game with two or more players sharing the top score is a `Tie`.

pub mod engine;
pub mod result;
pub mod setup;

pub use engine::GameEngine;
pub use result::{GameReport, GameResult, TurnSummary};
pub use setup::{GameBuilder, SetupError, MAX_PLAYERS};
