use thiserror::Error;

/// Failures of the draw and chase operations themselves.
#[derive(Error, Debug, PartialEq)]
pub enum GachaError {
    /// The candidate pool for the selected rarity and season is empty.
    ///
    /// The draw is aborted before anything is granted and the surrounding
    /// transaction is rolled back, so pity counters are left untouched.
    #[error("No objekts available for rarity {rarity}{}", season_suffix(.season))]
    NoCandidates {
        /// Rarity tier chosen by the selector
        rarity: i32,
        /// Season filter applied to the pool, if any
        season: Option<String>,
    },

    /// The requested chase slug does not exist in the catalog.
    #[error("Objekt '{0}' does not exist")]
    InvalidChaseTarget(String),

    /// An id chosen from the catalog disappeared before it could be granted.
    #[error("Objekt with id {0} not found")]
    ObjektNotFound(i32),
}

fn season_suffix(season: &Option<String>) -> String {
    match season {
        Some(season) => format!(" in season {}", season),
        None => String::new(),
    }
}
