//! User data repository for violation tracking.
//!
//! This module provides the `UserRepository`, the persistent per-user violation counter.
//! Every mutation is a single statement so concurrent repeat offenses from the same user
//! cannot lose increments.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::user::{violation_count_from_entity, User},
};

/// Repository providing database operations for users and their violation counts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user record with a violation count of zero.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - A record for this user already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, user_id: u64) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(user_id.to_string()),
            violation_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => AppError::Conflict(format!("User {} already exists", user_id)),
            err => err,
        })?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that Discord ID
    /// - `Err(AppError)` - Database error or corrupted row
    #[cfg(test)]
    pub async fn find_by_id(&self, user_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets the current violation count for a user.
    ///
    /// A missing record is reported as `None` rather than created here; the caller decides
    /// whether the user should be initialized.
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Stored violation count
    /// - `Ok(None)` - User not seen before (count is zero)
    /// - `Err(AppError)` - Database error or negative stored count
    pub async fn get_violations(&self, user_id: u64) -> Result<Option<u32>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.as_ref().map(violation_count_from_entity).transpose()
    }

    /// Atomically adds one to the user's violation count.
    ///
    /// Runs `UPDATE ... SET violation_count = violation_count + 1 ... RETURNING` so the
    /// returned count reflects this increment even under concurrent offenses.
    ///
    /// # Returns
    /// - `Ok(count)` - The violation count after the increment
    /// - `Err(AppError::NotFound)` - No record exists for the user
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn increment(&self, user_id: u64) -> Result<u32, AppError> {
        let updated = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::ViolationCount,
                Expr::col(entity::user::Column::ViolationCount).add(1),
            )
            .filter(entity::user::Column::DiscordId.eq(user_id.to_string()))
            .exec_with_returning(self.db)
            .await?;

        let entity = updated
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        violation_count_from_entity(&entity)
    }

    /// Atomically sets the user's violation count back to zero.
    ///
    /// # Returns
    /// - `Ok(())` - Count reset
    /// - `Err(AppError::NotFound)` - No record exists for the user
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn reset(&self, user_id: u64) -> Result<(), AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::ViolationCount, Expr::value(0))
            .filter(entity::user::Column::DiscordId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        Ok(())
    }
}
