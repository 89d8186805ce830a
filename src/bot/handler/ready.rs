//! Ready event handler for bot initialization.
//!
//! Fired once per gateway session after authentication. Used to log which account
//! connected and which channel is being moderated.

use serenity::all::{Context, Ready};

use crate::service::moderation::ModerationConfig;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context
/// - `ready` - Ready event data containing bot user information
/// - `config` - Moderation settings, logged for operators
pub async fn handle_ready(_ctx: Context, ready: Ready, config: &ModerationConfig) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match config.channel_id {
        Some(channel_id) => tracing::info!("Moderating channel {}", channel_id),
        None => tracing::info!("No channel configured, moderating all channels"),
    }
}
