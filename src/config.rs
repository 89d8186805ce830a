use tracing::Level;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://repost-guard.db?mode=rwc";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration read once from the environment at startup.
pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Channel to moderate; `None` when `CHANNEL_ID` is unset or `0`.
    pub channel_id: Option<u64>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let channel_id = match std::env::var("CHANNEL_ID") {
            Ok(value) => parse_channel_id(&value)?,
            Err(_) => None,
        };

        let log_level = parse_log_level(
            &std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        )?;

        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            channel_id,
            log_level,
        })
    }
}

/// Parses `CHANNEL_ID`, mapping `0` (and an empty value) to "no channel filter".
fn parse_channel_id(value: &str) -> Result<Option<u64>, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let id = value
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CHANNEL_ID".to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })?;

    Ok((id != 0).then_some(id))
}

fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "LOG_LEVEL".to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
