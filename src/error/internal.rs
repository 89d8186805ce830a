use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Failure to convert Unix timestamp to Discord timestamp
    ///
    /// Occurs when a timeout deadline cannot be represented as a Discord timestamp,
    /// typically due to the timestamp being out of range.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// A stored violation count is below zero.
    ///
    /// Counts only move through increment and reset, so this indicates the row was
    /// edited outside the bot.
    #[error("User {discord_id} has a negative violation count ({count})")]
    NegativeViolationCount {
        /// Discord ID of the affected user
        discord_id: String,
        /// The stored count
        count: i32,
    },
}
