//! SeaORM entity models for the repost-guard database.

pub mod prelude;

pub mod seen_link;
pub mod temp_ban;
pub mod user;
