//! Temp ban factory for creating test temp ban entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a temp ban expiring at the given time.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the ban applies to
/// - `user_id` - Banned user
/// - `expires_at` - When the ban should be lifted
///
/// # Returns
/// - `Ok(entity::temp_ban::Model)` - Created temp ban entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_temp_ban(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    expires_at: DateTime<Utc>,
) -> Result<entity::temp_ban::Model, DbErr> {
    entity::temp_ban::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        expires_at: ActiveValue::Set(expires_at),
        reason: ActiveValue::Set("test ban".to_string()),
    }
    .insert(db)
    .await
}
