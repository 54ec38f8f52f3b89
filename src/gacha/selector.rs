//! Weighted rarity selection.
//!
//! A draw first picks a tier from the base table (or the rate-up table) and, for
//! tier 1 on a banner, a second weighted choice decides whether the banner's own
//! season or the customs season supplies the commons.

use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};

use crate::{
    error::config::ConfigError,
    gacha::config::{BannerWeights, RarityWeights, COMMON_TIER, RATE_UP_TIER},
    model::banner::Banner,
};

/// Tier and optional season filter chosen for one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub tier: i32,
    /// Season the candidate pool is restricted to; `None` draws from every season.
    pub season: Option<String>,
}

/// Samples rarity tiers from prebuilt weighted distributions.
#[derive(Debug, Clone)]
pub struct RaritySelector {
    base_tiers: Vec<i32>,
    base: WeightedIndex<f64>,
    rate_up: WeightedIndex<f64>,
    common_season: WeightedIndex<f64>,
    rate_up_season: String,
    customs_season: String,
}

impl RaritySelector {
    /// Builds the selector from validated weight tables.
    ///
    /// # Returns
    /// - `Ok(RaritySelector)` - Selector ready to sample
    /// - `Err(ConfigError::InvalidGachaConfig)` - A table cannot be sampled
    pub fn new(weights: &RarityWeights, banner: &BannerWeights) -> Result<Self, ConfigError> {
        let base_tiers = weights.tiers.iter().map(|entry| entry.tier).collect();
        let base = weighted(weights.tiers.iter().map(|entry| entry.weight), "rarity")?;
        let rate_up = weighted(
            [banner.rate_up_weight, banner.rate_up_common_weight],
            "rate-up",
        )?;
        let common_season = weighted(
            [banner.banner_season_weight, banner.customs_season_weight],
            "tier 1 season",
        )?;

        Ok(Self {
            base_tiers,
            base,
            rate_up,
            common_season,
            rate_up_season: banner.rate_up_season.clone(),
            customs_season: banner.customs_season.clone(),
        })
    }

    /// Picks the tier and season filter for one draw.
    ///
    /// # Arguments
    /// - `banner` - Banner the user is spinning on, if any
    /// - `rng` - Source of randomness
    ///
    /// # Returns
    /// - `Selection` - Tier plus the season the pool must come from
    pub fn select<R: Rng + ?Sized>(&self, banner: Option<&Banner>, rng: &mut R) -> Selection {
        match banner {
            None => Selection {
                tier: self.sample_base(rng),
                season: None,
            },
            Some(Banner::Season(season)) => {
                let tier = self.sample_base(rng);
                self.with_season(tier, season, rng)
            }
            Some(Banner::RateUp) => {
                let tier = if self.rate_up.sample(rng) == 0 {
                    RATE_UP_TIER
                } else {
                    COMMON_TIER
                };
                self.with_season(tier, &self.rate_up_season, rng)
            }
        }
    }

    /// Season a banner restricts its pool and pity guarantee to.
    pub fn banner_season<'a>(&'a self, banner: &'a Banner) -> &'a str {
        match banner {
            Banner::Season(season) => season,
            Banner::RateUp => &self.rate_up_season,
        }
    }

    fn sample_base<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        self.base_tiers[self.base.sample(rng)]
    }

    fn with_season<R: Rng + ?Sized>(&self, tier: i32, season: &str, rng: &mut R) -> Selection {
        let season = if tier == COMMON_TIER && self.common_season.sample(rng) == 1 {
            self.customs_season.clone()
        } else {
            season.to_string()
        };

        Selection {
            tier,
            season: Some(season),
        }
    }
}

fn weighted(
    weights: impl IntoIterator<Item = f64>,
    table: &str,
) -> Result<WeightedIndex<f64>, ConfigError> {
    WeightedIndex::new(weights).map_err(|e| {
        ConfigError::InvalidGachaConfig(format!("{} weights cannot be sampled: {}", table, e))
    })
}
