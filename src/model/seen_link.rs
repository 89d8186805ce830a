//! Seen link domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Record that a user already posted a given video.
///
/// Presence of the record, not a count, marks the next posting of the same video by the
/// same user as a repeat offense.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenLink {
    /// Discord ID of the user who posted the video.
    pub user_id: u64,
    /// Canonical video identifier extracted from the link.
    pub video_id: String,
    /// Link text as matched in the message.
    pub url: String,
    /// Message that first posted the video.
    pub message_id: u64,
    /// Time of first sighting.
    pub created_at: DateTime<Utc>,
}

impl SeenLink {
    /// Converts an entity model to a seen link domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(SeenLink)` - The converted domain model
    /// - `Err(AppError::InternalError(ParseStringId))` - Stored user or message ID is not a u64
    pub fn from_entity(entity: entity::seen_link::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            video_id: entity.video_id,
            url: entity.url,
            message_id: parse_u64_from_string(entity.message_id)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for recording the first sighting of a video.
#[derive(Debug, Clone)]
pub struct CreateSeenLinkParam {
    /// Discord ID of the posting user.
    pub user_id: u64,
    /// Canonical video identifier.
    pub video_id: String,
    /// Link text as matched in the message.
    pub url: String,
    /// Message that posted the video.
    pub message_id: u64,
}
