//! Temporary ban data repository.
//!
//! Discord bans never expire on their own, so timed bans are recorded here and lifted by
//! the ban expiry scheduler.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{error::AppError, model::temp_ban::TempBan};

/// Repository providing database operations for temporary bans.
pub struct TempBanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TempBanRepository<'a> {
    /// Creates a new TempBanRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a ban expiring at `expires_at`.
    ///
    /// A user banned again before the previous ban was lifted gets the later expiry.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the ban applies to
    /// - `user_id` - Banned user
    /// - `expires_at` - When the ban should be lifted
    /// - `reason` - Audit log reason the ban was issued with
    ///
    /// # Returns
    /// - `Ok(TempBan)` - The stored ban
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(
        &self,
        guild_id: u64,
        user_id: u64,
        expires_at: DateTime<Utc>,
        reason: &str,
    ) -> Result<TempBan, AppError> {
        let entity = entity::prelude::TempBan::insert(entity::temp_ban::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            reason: ActiveValue::Set(reason.to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::temp_ban::Column::GuildId,
                entity::temp_ban::Column::UserId,
            ])
            .update_columns([
                entity::temp_ban::Column::ExpiresAt,
                entity::temp_ban::Column::Reason,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        TempBan::from_entity(entity)
    }

    /// Gets all bans whose expiry is at or before `now`, earliest first.
    pub async fn get_expired(&self, now: DateTime<Utc>) -> Result<Vec<TempBan>, AppError> {
        let entities = entity::prelude::TempBan::find()
            .filter(entity::temp_ban::Column::ExpiresAt.lte(now))
            .order_by_asc(entity::temp_ban::Column::ExpiresAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(TempBan::from_entity).collect()
    }

    /// Removes the ban record for a user in a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - Record removed
    /// - `Ok(false)` - No record existed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::TempBan::delete_many()
            .filter(entity::temp_ban::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::temp_ban::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
