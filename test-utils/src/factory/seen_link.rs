//! Seen link factory for creating test seen link entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seen links with customizable fields.
///
/// The owning user must already exist; seen links reference `user.discord_id`.
pub struct SeenLinkFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    video_id: String,
    url: String,
    message_id: String,
}

impl<'a> SeenLinkFactory<'a> {
    /// Creates a new SeenLinkFactory with default values.
    ///
    /// Defaults:
    /// - url: `https://youtu.be/{video_id}`
    /// - message_id: next unique snowflake-like id
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: impl Into<String>,
        video_id: impl Into<String>,
    ) -> Self {
        let video_id = video_id.into();
        Self {
            db,
            user_id: user_id.into(),
            url: format!("https://youtu.be/{}", video_id),
            video_id,
            message_id: next_id().to_string(),
        }
    }

    /// Sets the matched URL text.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the id of the message that first posted the link.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Builds and inserts the seen link entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::seen_link::Model)` - Created seen link entity
    /// - `Err(DbErr)` - Database error during insert (duplicate pair, missing user)
    pub async fn build(self) -> Result<entity::seen_link::Model, DbErr> {
        entity::seen_link::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            video_id: ActiveValue::Set(self.video_id),
            url: ActiveValue::Set(self.url),
            message_id: ActiveValue::Set(self.message_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a seen link with default values for the given user and video.
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(db).await?;
/// let link = create_seen_link(db, &user.discord_id, "dqw4w9wgxcq").await?;
/// ```
pub async fn create_seen_link(
    db: &DatabaseConnection,
    user_id: &str,
    video_id: &str,
) -> Result<entity::seen_link::Model, DbErr> {
    SeenLinkFactory::new(db, user_id, video_id).build().await
}
