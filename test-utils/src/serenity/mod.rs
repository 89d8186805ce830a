//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's gateway would deliver.
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;

pub use message::create_test_message;
