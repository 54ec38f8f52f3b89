use std::num::ParseIntError;
use thiserror::Error;

/// Stored or supplied data that this crate never writes itself.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A Discord user ID could not be read back as `u64`.
    ///
    /// `pity.user_id`, `collection.user_id` and `economy.user_id` are `TEXT`
    /// columns holding the decimal snowflake. A value that does not parse was
    /// written by something outside the repositories, or came from a command
    /// argument that is not a snowflake.
    #[error("Discord user ID '{value}' is not a valid snowflake: {source}")]
    ParseStringId {
        /// The text that failed to parse
        value: String,
        #[source]
        source: ParseIntError,
    },
}
