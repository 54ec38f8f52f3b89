use std::path::PathBuf;

use crate::{
    error::{config::ConfigError, AppError},
    gacha::config::GachaConfig,
};

pub struct Config {
    pub database_url: String,

    /// JSON file overriding the default draw tables.
    pub gacha_config_path: Option<PathBuf>,
    /// JSON array of catalog entries seeded at startup.
    pub catalog_seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            gacha_config_path: std::env::var("GACHA_CONFIG_PATH").ok().map(PathBuf::from),
            catalog_seed_path: std::env::var("CATALOG_SEED_PATH").ok().map(PathBuf::from),
        })
    }

    /// Loads the draw tables, falling back to the defaults when no file is configured.
    ///
    /// The tables are not validated here; `Gacha::new` does that.
    ///
    /// # Returns
    /// - `Ok(GachaConfig)` - Configured or default tables
    /// - `Err(AppError::IoErr)` - Configured file could not be read
    /// - `Err(AppError::JsonErr)` - Configured file is not valid JSON for `GachaConfig`
    pub fn load_gacha_config(&self) -> Result<GachaConfig, AppError> {
        let Some(path) = &self.gacha_config_path else {
            return Ok(GachaConfig::default());
        };

        let contents = std::fs::read_to_string(path)?;

        Ok(serde_json::from_str(&contents)?)
    }
}
