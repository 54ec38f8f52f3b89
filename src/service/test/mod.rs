use std::collections::BTreeSet;

use crate::gacha::{
    config::{GachaConfig, PityThresholds, RarityWeights, TierWeight},
    Gacha,
};

mod spin;

/// Builds an engine whose base table always selects `tier`.
fn gacha_always(tier: i32) -> Gacha {
    gacha_with(GachaConfig {
        rarity_weights: RarityWeights {
            tiers: vec![TierWeight { tier, weight: 1.0 }],
        },
        ..GachaConfig::default()
    })
}

/// Same as `gacha_always`, with general pity that never triggers.
fn gacha_always_without_general_pity(tier: i32) -> Gacha {
    gacha_with(GachaConfig {
        rarity_weights: RarityWeights {
            tiers: vec![TierWeight { tier, weight: 1.0 }],
        },
        pity: PityThresholds {
            low_tiers: BTreeSet::new(),
            ..PityThresholds::default()
        },
        ..GachaConfig::default()
    })
}

fn gacha_with(config: GachaConfig) -> Gacha {
    Gacha::new(config).unwrap()
}
