//! Error types for the moderation bot.
//!
//! `AppError` is the top-level error returned by repositories, services and startup code.
//! Lookup misses (`NotFound`) and duplicate inserts (`Conflict`) are control-flow signals the
//! moderation engine handles locally; everything else aborts processing of the current
//! message and is logged by the gateway handler.

pub mod config;
pub mod internal;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected internal condition indicating a bug or corrupted data.
    #[error(transparent)]
    InternalError(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Storage unavailable or a constraint violation other than a duplicate key.
    #[error(transparent)]
    DbErr(DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when Discord refuses or fails a moderation
    /// action (missing permissions, unknown member, network failure).
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// No record exists for the lookup.
    ///
    /// # Fields
    /// - Message describing what record was not found
    #[error("{0}")]
    NotFound(String),

    /// Insert collided with an existing record.
    ///
    /// # Fields
    /// - Message describing the duplicate record
    #[error("{0}")]
    Conflict(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Conversion from SeaORM errors.
///
/// Unique and primary key violations become `Conflict` so callers can treat a duplicate
/// insert as a signal instead of a storage failure.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::Conflict(detail),
            _ => AppError::DbErr(err),
        }
    }
}
