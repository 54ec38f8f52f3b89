//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each table and return domain models. They
//! are generic over `ConnectionTrait` so the same repository works against the
//! connection pool or inside an open transaction; the spin service relies on the
//! latter to commit a grant and its pity update together.

pub mod collection;
pub mod economy;
pub mod objekt;
pub mod pity;
