//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardDefinition`: one static catalog row (name, category, cost, value, quantity)
//! - `Card`: the value object players hold
//! - `CardCatalog`: case-insensitive lookup table built once at startup

pub mod catalog;
pub mod definition;

pub use catalog::{CardCatalog, CatalogError};
pub use definition::{Card, CardCategory, CardDefinition, CardId};
