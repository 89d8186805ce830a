//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Creates a test Serenity Message posted in a guild channel.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `guild_id` - Guild the channel belongs to, `None` for a direct message
/// - `author_id` - Author user ID
/// - `author_is_bot` - Whether the author is a bot account
/// - `content` - Raw message text
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// let message = create_test_message(1, 2, Some(3), 4, false, "https://youtu.be/abc");
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author_id: u64,
    author_is_bot: bool,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": {
            "id": author_id.to_string(),
            "username": format!("user{}", author_id),
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": author_is_bot,
        },
        "content": content,
        "timestamp": "2026-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
