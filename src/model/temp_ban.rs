//! Temporary ban domain model.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A Discord ban that should be lifted once `expires_at` passes.
#[derive(Debug, Clone, PartialEq)]
pub struct TempBan {
    pub guild_id: u64,
    pub user_id: u64,
    pub expires_at: DateTime<Utc>,
    /// Audit log reason the ban was issued with.
    pub reason: String,
}

impl TempBan {
    /// Converts an entity model to a temp ban domain model at the repository boundary.
    pub fn from_entity(entity: entity::temp_ban::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            expires_at: entity.expires_at,
            reason: entity.reason,
        })
    }
}
