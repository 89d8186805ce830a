use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{
    model::{
        message::IncomingMessage,
        moderation::{IgnoreReason, MessageOutcome},
    },
    service::{
        actions::DiscordModerationActions,
        moderation::{ModerationConfig, ModerationService},
    },
};

/// Handle message creation in a channel
///
/// Runs the message through the moderation engine and logs the outcome. Errors abort
/// processing of this message only.
pub async fn handle_message(
    db: &DatabaseConnection,
    config: &ModerationConfig,
    ctx: Context,
    message: Message,
) {
    let incoming = IncomingMessage::from(&message);
    let actions = DiscordModerationActions::new(ctx.http.clone());
    let service = ModerationService::new(db, &actions, config);

    match service.handle_message(&incoming).await {
        Ok(MessageOutcome::Ignored(IgnoreReason::NoLink)) => {}
        Ok(MessageOutcome::Ignored(reason)) => {
            tracing::trace!("Ignored message {}: {:?}", incoming.message_id, reason);
        }
        Ok(MessageOutcome::FirstSighting { video_id }) => {
            tracing::debug!(
                "First sighting of video {} from user {}",
                video_id,
                incoming.author_id
            );
        }
        Ok(MessageOutcome::RepeatOffense(report)) => {
            tracing::info!(
                "Handled repost of video {} by user {}: {} violations, action {:?} applied: {}, message deleted: {}, reset: {}",
                report.video_id,
                incoming.author_id,
                report.violations,
                report.action,
                report.action_applied,
                report.message_deleted,
                report.reset
            );
        }
        Err(e) => {
            tracing::error!(
                "Failed to process message {} from user {} in channel {}: {}",
                incoming.message_id,
                incoming.author_id,
                incoming.channel_id,
                e
            );
        }
    }
}
