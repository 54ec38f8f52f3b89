//! Error types and user-facing message mapping.
//!
//! `AppError` is the top-level error returned by services. It wraps the domain
//! specific errors and knows how to turn itself into a message a command layer can
//! show to the user without leaking internal details.

pub mod config;
pub mod gacha;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, gacha::GachaError, internal::InternalError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so repository and engine
/// errors can be propagated with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Draw or chase failure (empty pool, unknown chase target).
    ///
    /// These are expected outcomes and are shown to the user as-is.
    #[error(transparent)]
    GachaErr(#[from] GachaError),

    /// Internal error indicating unexpected stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Includes transaction begin/commit failures; a draw that fails here was
    /// not committed.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure reading a configuration or seed file.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Failure parsing a configuration or seed file.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}

impl AppError {
    /// Converts the error into a message suitable for showing to a user.
    ///
    /// Gacha errors carry their own wording. Everything else is logged at error
    /// level with full details and replaced by a generic message.
    ///
    /// # Returns
    /// - `String` - Message for the command layer to display
    pub fn user_message(&self) -> String {
        match self {
            Self::GachaErr(GachaError::NoCandidates { .. }) => {
                "No objekts are available for this spin.".to_string()
            }
            Self::GachaErr(GachaError::InvalidChaseTarget(slug)) => {
                format!("The objekt '{}' does not exist!", slug)
            }
            err => {
                tracing::error!("{}", err);
                "An error occurred while processing your request. Please try again later."
                    .to_string()
            }
        }
    }
}
