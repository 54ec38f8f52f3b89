/// Banner a spin is made on.
///
/// Spinning without a banner draws from the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// Biases the pool towards one season, e.g. `Atom01`.
    Season(String),
    /// Replaces the base rarity table with the rate-up table.
    RateUp,
}

impl Banner {
    /// Parses a banner choice as sent by the command layer.
    ///
    /// `rateup` (any casing) selects the rate-up banner, anything else names a season.
    ///
    /// # Arguments
    /// - `value` - Banner choice value
    ///
    /// # Returns
    /// - `Banner` - Parsed banner
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("rateup") {
            Self::RateUp
        } else {
            Self::Season(value.to_string())
        }
    }
}
