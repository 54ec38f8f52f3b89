//! Objekt gacha draw and pity engine.
//!
//! Draws objekts for Discord users from a seeded catalog, tracks general and
//! chase pity per user, and credits como for every grant. Each draw commits its
//! grant, reward and pity update in one database transaction.
//!
//! - `gacha` - Pure selection and pity logic
//! - `service` - Transactional spin, chase and catalog operations
//! - `data` - SeaORM repositories
//! - `model` - Domain models returned by services
//! - `config` / `startup` - Environment configuration and database setup

pub mod config;
pub mod data;
pub mod error;
pub mod gacha;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
