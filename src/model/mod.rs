//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data layer boundary
//! so services never depend on database structures.

pub mod message;
pub mod moderation;
pub mod seen_link;
pub mod temp_ban;
pub mod user;
