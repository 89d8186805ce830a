//! Database repository layer.
//!
//! Repositories wrap SeaORM entity operations for each table and return domain models
//! from `crate::model`. Atomicity the moderation engine relies on lives here: counter
//! updates are single conditional UPDATE statements and seen link inserts lean on the
//! `(user_id, video_id)` primary key.

pub mod seen_link;
pub mod temp_ban;
pub mod user;
