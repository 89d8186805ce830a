//! Service layer for moderation logic.
//!
//! Services sit between the gateway handlers and the data layer. The link extractor and
//! escalation policy are pure functions; the moderation engine coordinates repositories
//! and Discord actions for each incoming message.

pub mod actions;
pub mod escalation;
pub mod link;
pub mod moderation;
