//! Per-player deck with draw, discard and auto-reshuffle.

pub mod personal;

pub use personal::PersonalDeck;
