use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{seen_link::SeenLinkRepository, user::UserRepository},
    error::AppError,
    model::{
        message::IncomingMessage,
        moderation::{IgnoreReason, MessageOutcome, OffenseReport, PunitiveAction},
    },
    service::{
        actions::mock::{ActionCall, ActionKind, RecordingActions},
        escalation::{BAN_REASON, KICK_REASON},
        moderation::{ModerationConfig, ModerationService},
    },
};

mod escalation;
mod ignore;

const GUILD_ID: u64 = 900000000000000001;
const CHANNEL_ID: u64 = 900000000000000002;
const AUTHOR_ID: u64 = 123456789;
const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
const VIDEO_ID: &str = "dqw4w9wgxcq";

fn moderated_channel() -> ModerationConfig {
    ModerationConfig {
        channel_id: Some(CHANNEL_ID),
    }
}

/// A guild message from `AUTHOR_ID` in the moderated channel.
fn message(message_id: u64, content: &str) -> IncomingMessage {
    IncomingMessage {
        message_id,
        channel_id: CHANNEL_ID,
        guild_id: Some(GUILD_ID),
        author_id: AUTHOR_ID,
        author_name: "reposter".to_string(),
        author_is_bot: false,
        content: content.to_string(),
    }
}

fn expect_offense(outcome: MessageOutcome) -> OffenseReport {
    match outcome {
        MessageOutcome::RepeatOffense(report) => report,
        other => panic!("expected repeat offense, got {:?}", other),
    }
}
