//! Seen link data repository.
//!
//! This module provides the `SeenLinkRepository`, the persistent record of which videos
//! each user has already posted. The table's primary key is `(user_id, video_id)`, so
//! `create` doubles as an atomic check-and-insert: a `Conflict` error means the user
//! posted the video before.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::seen_link::{CreateSeenLinkParam, SeenLink},
};

/// Repository providing database operations for seen links.
pub struct SeenLinkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeenLinkRepository<'a> {
    /// Creates a new SeenLinkRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the first sighting of a video for a user.
    ///
    /// The owning user record must already exist.
    ///
    /// # Arguments
    /// - `param` - User, video, matched URL and message metadata
    ///
    /// # Returns
    /// - `Ok(SeenLink)` - The created record
    /// - `Err(AppError::Conflict)` - The user already posted this video
    /// - `Err(AppError::DbErr)` - Database error, including a missing user record
    pub async fn create(&self, param: CreateSeenLinkParam) -> Result<SeenLink, AppError> {
        let user_id = param.user_id;
        let video_id = param.video_id.clone();

        let entity = entity::prelude::SeenLink::insert(entity::seen_link::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            video_id: ActiveValue::Set(param.video_id),
            url: ActiveValue::Set(param.url),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => AppError::Conflict(format!(
                "User {} already posted video {}",
                user_id, video_id
            )),
            err => err,
        })?;

        SeenLink::from_entity(entity)
    }

    /// Looks up the record for a user and video.
    ///
    /// # Returns
    /// - `Ok(Some(SeenLink))` - The user posted this video before
    /// - `Ok(None)` - No record for the pair
    /// - `Err(AppError)` - Database error or corrupted row
    pub async fn exists(&self, user_id: u64, video_id: &str) -> Result<Option<SeenLink>, AppError> {
        let entity = entity::prelude::SeenLink::find_by_id((user_id.to_string(), video_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(SeenLink::from_entity).transpose()
    }

    /// Gets every video recorded for a user, oldest first.
    ///
    /// Used in tests to inspect what cleanup left behind.
    #[cfg(test)]
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<SeenLink>, AppError> {
        use sea_orm::QueryOrder;

        let entities = entity::prelude::SeenLink::find()
            .filter(entity::seen_link::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::seen_link::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(SeenLink::from_entity).collect()
    }

    /// Deletes every record of a video, across all users.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of records removed (at least one)
    /// - `Err(AppError::NotFound)` - No user had posted the video
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, video_id: &str) -> Result<u64, AppError> {
        let result = entity::prelude::SeenLink::delete_many()
            .filter(entity::seen_link::Column::VideoId.eq(video_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "No seen links for video {}",
                video_id
            )));
        }

        Ok(result.rows_affected)
    }
}
