//! Escalation policy mapping a violation count to a punishment.

use chrono::Duration;

use crate::model::moderation::{Escalation, PunitiveAction};

/// Audit log reason attached to timeouts.
pub const TIMEOUT_REASON: &str = "Reposting the same video";
pub const KICK_REASON: &str = "Stop reposting the same video! Next time you will be banned";
pub const BAN_REASON: &str = "Stop reposting the same video!";

pub const TIMEOUT_HOURS: i64 = 3;
pub const BAN_DAYS: i64 = 7;
/// Days of the offender's message history Discord purges on ban.
pub const BAN_DELETE_MESSAGE_DAYS: u8 = 7;

/// Returns the escalation for a violation count taken after the increment.
///
/// | count | action      | reset |
/// |-------|-------------|-------|
/// | 0     | none        | no    |
/// | 1     | timeout 3h  | no    |
/// | 2     | kick        | no    |
/// | 3     | ban 7 days  | yes   |
/// | >3    | none        | yes   |
pub fn escalate(violations: u32) -> Escalation {
    match violations {
        0 => Escalation {
            action: None,
            reset: false,
        },
        1 => Escalation {
            action: Some(PunitiveAction::Timeout {
                duration: Duration::hours(TIMEOUT_HOURS),
            }),
            reset: false,
        },
        2 => Escalation {
            action: Some(PunitiveAction::Kick {
                reason: KICK_REASON,
            }),
            reset: false,
        },
        3 => Escalation {
            action: Some(PunitiveAction::Ban {
                duration: Duration::days(BAN_DAYS),
                delete_message_days: BAN_DELETE_MESSAGE_DAYS,
                reason: BAN_REASON,
            }),
            reset: true,
        },
        _ => Escalation {
            action: None,
            reset: true,
        },
    }
}
