//! Platform-neutral view of an incoming chat message.

use serenity::all::Message;

/// The parts of a gateway message the moderation engine needs.
///
/// Built from a serenity `Message` in the gateway handler so the engine can be exercised
/// without a live Discord connection.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub message_id: u64,
    pub channel_id: u64,
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub author_id: u64,
    pub author_name: String,
    pub author_is_bot: bool,
    pub content: String,
}

impl From<&Message> for IncomingMessage {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.id.get(),
            channel_id: message.channel_id.get(),
            guild_id: message.guild_id.map(|id| id.get()),
            author_id: message.author.id.get(),
            author_name: message.author.name.clone(),
            // System messages carry no moderation value and are treated like bots
            author_is_bot: message.author.bot || message.author.system,
            content: message.content.clone(),
        }
    }
}
