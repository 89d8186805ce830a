//! Discord gateway integration.
//!
//! The bot listens for guild messages and hands each one to the moderation engine. Serenity
//! dispatches events concurrently, so every message runs in its own task; consistency comes
//! from the database rather than from locks in the handler.
//!
//! The client's HTTP handle is shared with the ban expiry scheduler so both use the same
//! rate limiter.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability
//! - `GUILD_MESSAGES` - Message create events in guild channels
//! - `MESSAGE_CONTENT` - Message text, needed to find video links (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
