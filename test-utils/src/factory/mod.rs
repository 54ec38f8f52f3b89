//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields
//! they care about. Each table has a `*Factory` builder plus `create_*` shortcuts.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let objekt = factory::create_objekt_with_rarity(&db, 4).await?;
//! let catalog = factory::helpers::create_season_catalog(&db, "Atom01").await?;
//! factory::create_collection_entry(&db, 1, objekt.id, 2).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let objekt = factory::objekt::ObjektFactory::new(&db)
//!     .season("Binary01")
//!     .member("Kaede")
//!     .series("101")
//!     .rarity(6)
//!     .build()
//!     .await?;
//!
//! let pity = factory::pity::PityFactory::new(&db, 1)
//!     .pity_count(79)
//!     .chase(&objekt.slug, 249)
//!     .build()
//!     .await?;
//! ```

pub mod collection;
pub mod economy;
pub mod helpers;
pub mod objekt;
pub mod pity;

pub use collection::create_collection_entry;
pub use economy::create_balance;
pub use objekt::{create_objekt, create_objekt_in_season, create_objekt_with_rarity};
pub use pity::create_pity;
