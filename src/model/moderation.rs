//! Moderation decision types shared by the link extractor, escalation policy and engine.

use chrono::Duration;

/// A recognized video link extracted from message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLink {
    /// Canonical, lowercased video identifier used for equality.
    pub video_id: String,
    /// The link text as it appeared in the message.
    pub url: String,
}

/// Punishment applied to a repeat offender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunitiveAction {
    /// Disable communication for the given duration.
    Timeout { duration: Duration },
    /// Remove the member from the guild.
    Kick { reason: &'static str },
    /// Ban the member, purging recent messages, and lift the ban after `duration`.
    Ban {
        duration: Duration,
        delete_message_days: u8,
        reason: &'static str,
    },
}

/// What the escalation policy prescribes for a violation count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escalation {
    /// Action to apply, `None` for the cleanup-only tier.
    pub action: Option<PunitiveAction>,
    /// Whether the violation counter and triggering link record are wiped afterwards.
    pub reset: bool,
}

/// Why a message was not moderated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Author is a bot or system account.
    BotAuthor,
    /// Message was sent outside a guild.
    NotInGuild,
    /// Message was sent in a channel other than the moderated one.
    OtherChannel,
    /// Message contains no recognized video link.
    NoLink,
}

/// Result of a repeat offense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffenseReport {
    pub video_id: String,
    /// Violation count after the increment.
    pub violations: u32,
    /// Action prescribed by the escalation policy.
    pub action: Option<PunitiveAction>,
    /// Whether Discord accepted the action.
    pub action_applied: bool,
    /// Whether the offending message was deleted.
    pub message_deleted: bool,
    /// Whether reset-tier cleanup ran.
    pub reset: bool,
}

/// Terminal state of handling a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    Ignored(IgnoreReason),
    /// The user posted this video for the first time; it is now recorded.
    FirstSighting { video_id: String },
    RepeatOffense(OffenseReport),
}
