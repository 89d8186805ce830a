mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use crate::{
    config::Config, error::AppError, scheduler::ban_expiry,
    service::actions::DiscordModerationActions,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logging(&config);

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting repost guard");

    let (bot_client, discord_http) = bot::start::init_bot(&config, db.clone()).await?;

    // Keep the scheduler handle alive for the lifetime of the bot
    let _scheduler = ban_expiry::start_scheduler(
        db,
        Arc::new(DiscordModerationActions::new(discord_http)),
    )
    .await?;

    bot::start::start_bot(bot_client).await
}
