//! User domain model.

use chrono::{DateTime, Utc};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// A channel participant tracked by the moderation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user.
    pub discord_id: u64,
    /// Repeat offenses since the last reset.
    pub violation_count: u32,
    /// When the user was first seen posting a video link.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError(ParseStringId))` - Stored Discord ID is not a u64
    /// - `Err(AppError::InternalError(NegativeViolationCount))` - Stored count is below zero
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let violation_count = violation_count_from_entity(&entity)?;
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            violation_count,
            created_at: entity.created_at,
        })
    }
}

/// Reads the stored violation count, rejecting negative values.
pub fn violation_count_from_entity(entity: &entity::user::Model) -> Result<u32, AppError> {
    u32::try_from(entity.violation_count).map_err(|_| {
        InternalError::NegativeViolationCount {
            discord_id: entity.discord_id.clone(),
            count: entity.violation_count,
        }
        .into()
    })
}
