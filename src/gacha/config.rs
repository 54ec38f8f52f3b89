//! Tunable tables for the draw engine.
//!
//! Every struct deserializes with `#[serde(default)]` so a `GACHA_CONFIG_PATH` file
//! only needs to name the values it overrides. Defaults are the live bot's values.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::config::ConfigError;

/// Rarity tier of the most common objekts.
pub const COMMON_TIER: i32 = 1;

/// Rarity tier reserved for rate-up exclusive objekts.
pub const RATE_UP_TIER: i32 = 7;

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct GachaConfig {
    pub rarity_weights: RarityWeights,
    pub banner: BannerWeights,
    pub pity: PityThresholds,
    pub rewards: ComoRewards,
}

impl GachaConfig {
    /// Checks that every table can be sampled and every ceiling can be reached.
    ///
    /// # Returns
    /// - `Ok(())` - Configuration is usable
    /// - `Err(ConfigError::InvalidGachaConfig)` - Description of the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rarity_weights.validate()?;
        self.banner.validate()?;
        self.pity.validate()
    }
}

/// One row of the base rarity table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TierWeight {
    pub tier: i32,
    pub weight: f64,
}

/// Base six-tier table used when no rate-up banner is active.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RarityWeights {
    pub tiers: Vec<TierWeight>,
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            tiers: vec![
                TierWeight { tier: 6, weight: 0.003 },
                TierWeight { tier: 5, weight: 0.03 },
                TierWeight { tier: 4, weight: 0.067 },
                TierWeight { tier: 3, weight: 0.1 },
                TierWeight { tier: 2, weight: 0.2 },
                TierWeight { tier: 1, weight: 0.6 },
            ],
        }
    }
}

impl RarityWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.is_empty() {
            return Err(invalid("rarity weight table is empty"));
        }

        let mut seen = BTreeSet::new();
        for entry in &self.tiers {
            check_weight(&format!("tier {}", entry.tier), entry.weight)?;
            if !seen.insert(entry.tier) {
                return Err(invalid(format!("tier {} listed twice", entry.tier)));
            }
        }

        if self.tiers.iter().all(|entry| entry.weight == 0.0) {
            return Err(invalid("rarity weights are all zero"));
        }

        Ok(())
    }
}

/// Weights and seasons used when a banner is requested.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BannerWeights {
    /// Season whose objekts make up the rate-up banner.
    pub rate_up_season: String,
    /// Season that shares the tier-1 pool with every banner.
    pub customs_season: String,
    /// Weight of the rate-up tier on the rate-up banner.
    pub rate_up_weight: f64,
    /// Weight of tier 1 on the rate-up banner.
    pub rate_up_common_weight: f64,
    /// Weight of the banner's own season when tier 1 is drawn.
    pub banner_season_weight: f64,
    /// Weight of the customs season when tier 1 is drawn.
    pub customs_season_weight: f64,
}

impl Default for BannerWeights {
    fn default() -> Self {
        Self {
            rate_up_season: "Atom02".to_string(),
            customs_season: "GNDSG01".to_string(),
            rate_up_weight: 0.4,
            rate_up_common_weight: 0.6,
            banner_season_weight: 0.3,
            customs_season_weight: 0.7,
        }
    }
}

impl BannerWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        check_weight("rate_up_weight", self.rate_up_weight)?;
        check_weight("rate_up_common_weight", self.rate_up_common_weight)?;
        check_weight("banner_season_weight", self.banner_season_weight)?;
        check_weight("customs_season_weight", self.customs_season_weight)?;

        if self.rate_up_weight + self.rate_up_common_weight == 0.0 {
            return Err(invalid("rate-up banner weights are all zero"));
        }
        if self.banner_season_weight + self.customs_season_weight == 0.0 {
            return Err(invalid("tier 1 season weights are all zero"));
        }

        Ok(())
    }
}

/// Pity ceilings and the tier boundaries they act on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PityThresholds {
    /// Unlucky draws before a guaranteed unowned high-tier objekt.
    pub general_ceiling: i32,
    /// Draws before the chase objekt is forced.
    pub chase_ceiling: i32,
    /// Tiers that count towards general pity; anything else resets it.
    pub low_tiers: BTreeSet<i32>,
    /// Lowest tier the general pity guarantee may grant.
    pub guarantee_min_tier: i32,
    /// Whether choosing a new chase target also zeroes general pity.
    pub reset_general_on_chase_change: bool,
}

impl Default for PityThresholds {
    fn default() -> Self {
        Self {
            general_ceiling: 80,
            chase_ceiling: 250,
            low_tiers: BTreeSet::from([1, 2, 3, 4]),
            guarantee_min_tier: 4,
            reset_general_on_chase_change: true,
        }
    }
}

impl PityThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.general_ceiling < 1 {
            return Err(invalid("general_ceiling must be at least 1"));
        }
        if self.chase_ceiling < 1 {
            return Err(invalid("chase_ceiling must be at least 1"));
        }
        Ok(())
    }

    /// Returns whether a draw of `tier` counts towards general pity.
    pub fn is_low_tier(&self, tier: i32) -> bool {
        self.low_tiers.contains(&tier)
    }
}

/// Como credited per granted rarity tier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComoRewards {
    pub per_tier: BTreeMap<i32, i64>,
}

impl Default for ComoRewards {
    fn default() -> Self {
        Self {
            per_tier: BTreeMap::from([(1, 10), (2, 50), (3, 150), (4, 350), (5, 750), (6, 2000)]),
        }
    }
}

impl ComoRewards {
    /// Returns the reward for a tier, 0 for tiers without an entry.
    pub fn for_tier(&self, tier: i32) -> i64 {
        self.per_tier.get(&tier).copied().unwrap_or(0)
    }
}

fn check_weight(name: &str, weight: f64) -> Result<(), ConfigError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(invalid(format!("weight for {} must be a non-negative number", name)));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidGachaConfig(message.into())
}
