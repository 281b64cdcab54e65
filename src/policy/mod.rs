//! Acquisition decision making.
//!
//! Policies are trait-based so the engine can take any strategy object;
//! `GreedyPolicy` is the only one shipped and the engine's default.

pub mod acquisition;

pub use acquisition::{AcquisitionPolicy, GreedyPolicy};
