//! Test fixtures providing entity models without database insertion.
//!
//! Use fixtures to exercise entity-to-domain conversions and other logic that
//! does not need a database.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let objekt = fixture::objekt_entity();
//! let rare = fixture::objekt_entity_builder().rarity(6).build();
//! ```

pub mod objekt;
pub mod pity;

pub use objekt::{entity as objekt_entity, entity_builder as objekt_entity_builder};
pub use pity::{entity as pity_entity, entity_builder as pity_entity_builder};
