use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Gacha tables or thresholds cannot be used to build the engine.
    ///
    /// Raised by `Gacha::new` for empty or non-positive weight tables and zero pity
    /// ceilings, so a bad `GACHA_CONFIG_PATH` file fails at startup rather than mid-draw.
    #[error("Invalid gacha configuration: {0}")]
    InvalidGachaConfig(String),
}
