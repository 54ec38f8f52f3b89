//! Draw engine.
//!
//! Synchronous selection and pity logic with no database access:
//!
//! - `config` - Weight tables, pity thresholds and como rewards
//! - `selector` - Weighted rarity and season choice
//! - `resolver` - Candidate pool built from catalog ids
//! - `pity` - Chase and general pity state machine
//!
//! `SpinService` loads data inside a transaction and drives these pieces.

pub mod config;
pub mod pity;
pub mod resolver;
pub mod selector;

use crate::{
    error::config::ConfigError,
    gacha::{config::GachaConfig, pity::PityEngine, selector::RaritySelector},
};

/// Validated engine built once at startup and shared by services.
#[derive(Debug, Clone)]
pub struct Gacha {
    config: GachaConfig,
    selector: RaritySelector,
    pity: PityEngine,
}

impl Gacha {
    /// Validates the configuration and prebuilds the weighted tables.
    ///
    /// # Returns
    /// - `Ok(Gacha)` - Engine ready for draws
    /// - `Err(ConfigError::InvalidGachaConfig)` - Configuration cannot be used
    pub fn new(config: GachaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let selector = RaritySelector::new(&config.rarity_weights, &config.banner)?;
        let pity = PityEngine::new(config.pity.clone());

        Ok(Self {
            config,
            selector,
            pity,
        })
    }

    pub fn config(&self) -> &GachaConfig {
        &self.config
    }

    pub fn selector(&self) -> &RaritySelector {
        &self.selector
    }

    pub fn pity(&self) -> &PityEngine {
        &self.pity
    }
}
