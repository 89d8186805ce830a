//! Discord moderation actions behind a trait seam.
//!
//! The moderation engine and ban expiry scheduler only talk to Discord through
//! `ModerationActions`, so both can be exercised against a recording double in tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serenity::{
    all::{ChannelId, EditMember, GuildId, MessageId, Timestamp, UserId},
    http::{Http, HttpError},
};

use crate::error::{internal::InternalError, AppError};


/// Discord JSON error code returned when removing a ban that does not exist.
const UNKNOWN_BAN: isize = 10026;

/// Punitive and cleanup actions the bot performs on Discord.
#[serenity::async_trait]
pub trait ModerationActions: Send + Sync {
    /// Disables communication for a member until `until`.
    async fn timeout_user(
        &self,
        guild_id: u64,
        user_id: u64,
        until: DateTime<Utc>,
        reason: &str,
    ) -> Result<(), AppError>;

    /// Removes a member from the guild.
    async fn kick_user(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), AppError>;

    /// Bans a user, purging `delete_message_days` days of their messages.
    async fn ban_user(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
        delete_message_days: u8,
    ) -> Result<(), AppError>;

    /// Lifts a ban.
    ///
    /// # Returns
    /// - `Ok(true)` - Ban removed
    /// - `Ok(false)` - The user was not banned, e.g. a moderator already lifted it
    /// - `Err(AppError::DiscordErr)` - Discord refused or the request failed
    async fn unban_user(&self, guild_id: u64, user_id: u64, reason: &str)
        -> Result<bool, AppError>;

    /// Deletes a message from a channel.
    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError>;
}

/// `ModerationActions` backed by the bot's serenity HTTP client.
pub struct DiscordModerationActions {
    http: Arc<Http>,
}

impl DiscordModerationActions {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[serenity::async_trait]
impl ModerationActions for DiscordModerationActions {
    async fn timeout_user(
        &self,
        guild_id: u64,
        user_id: u64,
        until: DateTime<Utc>,
        reason: &str,
    ) -> Result<(), AppError> {
        let timestamp = Timestamp::from_unix_timestamp(until.timestamp()).map_err(|e| {
            InternalError::InvalidDiscordTimestamp {
                timestamp: until.timestamp(),
                reason: e.to_string(),
            }
        })?;

        GuildId::new(guild_id)
            .edit_member(
                &*self.http,
                UserId::new(user_id),
                EditMember::new()
                    .disable_communication_until_datetime(timestamp)
                    .audit_log_reason(reason),
            )
            .await?;

        Ok(())
    }

    async fn kick_user(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .kick_with_reason(&*self.http, UserId::new(user_id), reason)
            .await?;

        Ok(())
    }

    async fn ban_user(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
        delete_message_days: u8,
    ) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .ban_with_reason(
                &*self.http,
                UserId::new(user_id),
                delete_message_days,
                reason,
            )
            .await?;

        Ok(())
    }

    async fn unban_user(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
    ) -> Result<bool, AppError> {
        match self
            .http
            .remove_ban(GuildId::new(guild_id), UserId::new(user_id), Some(reason))
            .await
        {
            Ok(()) => Ok(true),
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.error.code == UNKNOWN_BAN =>
            {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .delete_message(&*self.http, MessageId::new(message_id))
            .await?;

        Ok(())
    }
}
