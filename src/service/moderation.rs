//! Moderation engine handling one incoming message end to end.
//!
//! Each message runs through the same pipeline: filter, extract a video link, make sure the
//! author has a violation record, then try to record the (author, video) pair. The insert
//! is guarded by the pair's primary key, so a `Conflict` is the authoritative signal that the
//! author already posted the video, even when two messages race.
//!
//! Repeat offenses increment the violation count, delete the message and apply the
//! escalation tier. Discord failures are logged and never roll back the count.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{seen_link::SeenLinkRepository, temp_ban::TempBanRepository, user::UserRepository},
    error::AppError,
    model::{
        message::IncomingMessage,
        moderation::{IgnoreReason, MessageOutcome, OffenseReport, PunitiveAction, VideoLink},
        seen_link::CreateSeenLinkParam,
    },
    service::{
        actions::ModerationActions,
        escalation::{escalate, TIMEOUT_REASON},
        link::extract_video_id,
    },
};

/// Engine settings read once at startup.
#[derive(Debug, Clone, Default)]
pub struct ModerationConfig {
    /// Only messages in this channel are moderated; `None` moderates every channel.
    pub channel_id: Option<u64>,
}

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
    actions: &'a dyn ModerationActions,
    config: &'a ModerationConfig,
}

impl<'a> ModerationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        actions: &'a dyn ModerationActions,
        config: &'a ModerationConfig,
    ) -> Self {
        Self {
            db,
            actions,
            config,
        }
    }

    /// Processes a single message.
    ///
    /// # Returns
    /// - `Ok(MessageOutcome::Ignored)` - Message filtered out, no state changed
    /// - `Ok(MessageOutcome::FirstSighting)` - Video recorded for the author
    /// - `Ok(MessageOutcome::RepeatOffense)` - Author reposted the video and was punished
    /// - `Err(AppError)` - Storage failure; processing of this message stopped
    pub async fn handle_message(
        &self,
        message: &IncomingMessage,
    ) -> Result<MessageOutcome, AppError> {
        if message.author_is_bot {
            return Ok(MessageOutcome::Ignored(IgnoreReason::BotAuthor));
        }

        let Some(guild_id) = message.guild_id else {
            return Ok(MessageOutcome::Ignored(IgnoreReason::NotInGuild));
        };

        match self.config.channel_id {
            Some(channel_id) if channel_id != message.channel_id => {
                return Ok(MessageOutcome::Ignored(IgnoreReason::OtherChannel));
            }
            Some(_) => {}
            None => tracing::info!(
                "Message {} from {} ({}) in channel {}",
                message.message_id,
                message.author_name,
                message.author_id,
                message.channel_id
            ),
        }

        let Some(link) = extract_video_id(&message.content) else {
            return Ok(MessageOutcome::Ignored(IgnoreReason::NoLink));
        };

        let previous_violations = self.ensure_user(message.author_id).await?;

        let seen_link_repo = SeenLinkRepository::new(self.db);
        let param = CreateSeenLinkParam {
            user_id: message.author_id,
            video_id: link.video_id.clone(),
            url: link.url.clone(),
            message_id: message.message_id,
        };

        match seen_link_repo.create(param).await {
            Ok(seen_link) => {
                tracing::debug!(
                    "Recorded video {} for user {} from message {}",
                    seen_link.video_id,
                    seen_link.user_id,
                    seen_link.message_id
                );

                Ok(MessageOutcome::FirstSighting {
                    video_id: link.video_id,
                })
            }
            Err(AppError::Conflict(_)) => {
                // A concurrent reset may have removed the record since the insert failed
                match seen_link_repo
                    .exists(message.author_id, &link.video_id)
                    .await?
                {
                    Some(previous) => tracing::warn!(
                        "Duplicate video {} from user {}, first posted in message {} at {} ({} previous violations)",
                        previous.url,
                        message.author_id,
                        previous.message_id,
                        previous.created_at,
                        previous_violations
                    ),
                    None => tracing::warn!(
                        "Duplicate video {} from user {} ({} previous violations)",
                        link.url,
                        message.author_id,
                        previous_violations
                    ),
                }

                let report = self.punish_repeat(guild_id, message, link).await?;

                Ok(MessageOutcome::RepeatOffense(report))
            }
            Err(e) => Err(e),
        }
    }

    /// Creates the author's violation record if this is their first link.
    ///
    /// Returns the author's violation count before this message.
    async fn ensure_user(&self, user_id: u64) -> Result<u32, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(violations) = user_repo.get_violations(user_id).await? {
            return Ok(violations);
        }

        match user_repo.create(user_id).await {
            Ok(user) => {
                tracing::debug!(
                    "Created violation record for user {} at {}",
                    user.discord_id,
                    user.created_at
                );
                Ok(user.violation_count)
            }
            // Another message from the same user created it first
            Err(AppError::Conflict(_)) => Ok(0),
            Err(e) => Err(e),
        }
    }

    async fn punish_repeat(
        &self,
        guild_id: u64,
        message: &IncomingMessage,
        link: VideoLink,
    ) -> Result<OffenseReport, AppError> {
        let user_repo = UserRepository::new(self.db);

        let violations = user_repo.increment(message.author_id).await?;

        tracing::debug!("User {} now has {} violations", message.author_id, violations);

        let message_deleted = match self
            .actions
            .delete_message(message.channel_id, message.message_id)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    "Deleted message {} from {} in channel {}: {}",
                    message.message_id,
                    message.author_name,
                    message.channel_id,
                    message.content
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    "Failed to delete message {} in channel {}: {}",
                    message.message_id,
                    message.channel_id,
                    e
                );
                false
            }
        };

        let escalation = escalate(violations);

        let action_applied = match &escalation.action {
            Some(action) => self.apply(guild_id, message.author_id, action).await,
            None => false,
        };

        if escalation.reset {
            self.reset_offender(message.author_id, &link.video_id)
                .await?;
        }

        Ok(OffenseReport {
            video_id: link.video_id,
            violations,
            action: escalation.action,
            action_applied,
            message_deleted,
            reset: escalation.reset,
        })
    }

    /// Applies a punishment, returning whether Discord accepted it.
    async fn apply(&self, guild_id: u64, user_id: u64, action: &PunitiveAction) -> bool {
        match action {
            PunitiveAction::Timeout { duration } => {
                let until = Utc::now() + *duration;

                match self
                    .actions
                    .timeout_user(guild_id, user_id, until, TIMEOUT_REASON)
                    .await
                {
                    Ok(()) => {
                        tracing::warn!(
                            "Timed out user {} in guild {} for {} hours",
                            user_id,
                            guild_id,
                            duration.num_hours()
                        );
                        true
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to timeout user {} in guild {}: {}",
                            user_id,
                            guild_id,
                            e
                        );
                        false
                    }
                }
            }
            PunitiveAction::Kick { reason } => {
                match self.actions.kick_user(guild_id, user_id, reason).await {
                    Ok(()) => {
                        tracing::warn!("Kicked user {} from guild {}", user_id, guild_id);
                        true
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to kick user {} from guild {}: {}",
                            user_id,
                            guild_id,
                            e
                        );
                        false
                    }
                }
            }
            PunitiveAction::Ban {
                duration,
                delete_message_days,
                reason,
            } => {
                if let Err(e) = self
                    .actions
                    .ban_user(guild_id, user_id, reason, *delete_message_days)
                    .await
                {
                    tracing::error!(
                        "Failed to ban user {} from guild {}: {}",
                        user_id,
                        guild_id,
                        e
                    );
                    return false;
                }

                tracing::warn!(
                    "Banned user {} from guild {} for {} days",
                    user_id,
                    guild_id,
                    duration.num_days()
                );

                let expires_at = Utc::now() + *duration;
                let temp_ban_repo = TempBanRepository::new(self.db);

                // The ban stands either way; without the record it must be lifted by hand
                if let Err(e) = temp_ban_repo
                    .upsert(guild_id, user_id, expires_at, reason)
                    .await
                {
                    tracing::error!(
                        "Failed to record ban expiry for user {} in guild {}: {}",
                        user_id,
                        guild_id,
                        e
                    );
                }

                true
            }
        }
    }

    /// Zeroes the violation count and forgets the video for every user, so the next post
    /// of it by anyone starts over.
    async fn reset_offender(&self, user_id: u64, video_id: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let seen_link_repo = SeenLinkRepository::new(self.db);

        user_repo.reset(user_id).await?;

        let cleared = match seen_link_repo.delete(video_id).await {
            Ok(count) => count,
            // Already cleared by a concurrent reset
            Err(AppError::NotFound(_)) => 0,
            Err(e) => return Err(e),
        };

        tracing::info!(
            "Reset violations for user {} and cleared {} records of video {}",
            user_id,
            cleared,
            video_id
        );

        Ok(())
    }
}
