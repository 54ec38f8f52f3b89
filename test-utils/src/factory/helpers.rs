//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::objekt::ObjektFactory;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one objekt per ordinary rarity tier (1 through 6) in a season.
///
/// # Arguments
/// - `db` - Database connection
/// - `season` - Season every objekt belongs to
///
/// # Returns
/// - `Ok(Vec<entity::objekt::Model>)` - Objekts ordered by rarity, tier 1 first
/// - `Err(DbErr)` - Database error during creation
pub async fn create_season_catalog(
    db: &DatabaseConnection,
    season: &str,
) -> Result<Vec<entity::objekt::Model>, DbErr> {
    let mut objekts = Vec::with_capacity(6);
    for rarity in 1..=6 {
        let objekt = ObjektFactory::new(db)
            .season(season)
            .rarity(rarity)
            .build()
            .await?;
        objekts.push(objekt);
    }

    Ok(objekts)
}
