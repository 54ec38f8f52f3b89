//! Domain models and parameter types.
//!
//! Entity models are converted into these types at the repository boundary so the
//! engine and services never see SeaORM structures.

pub mod banner;
pub mod objekt;
pub mod pity;
pub mod spin;
