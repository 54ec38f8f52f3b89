//! SeaORM entities for the objekt gacha schema.

pub mod prelude;

pub mod collection;
pub mod economy;
pub mod objekt;
pub mod pity;
