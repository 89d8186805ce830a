//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let link = factory::create_seen_link(&db, &user.discord_id, "dqw4w9wgxcq").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .discord_id("987654321")
//!     .violation_count(2)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod seen_link;
pub mod temp_ban;
pub mod user;

pub use seen_link::create_seen_link;
pub use temp_ban::create_temp_ban;
pub use user::{create_user, create_user_with_id};
