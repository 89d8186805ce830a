use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::temp_ban::TempBanRepository, error::AppError, service::actions::ModerationActions,
};

const UNBAN_REASON: &str = "Temporary ban expired";

/// Starts the ban expiry scheduler
///
/// Runs every minute and lifts temporary bans whose expiry has passed.
///
/// # Arguments
/// - `db`: Database connection
/// - `actions`: Discord actions used to lift bans
pub async fn start_scheduler(
    db: DatabaseConnection,
    actions: Arc<dyn ModerationActions>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_actions = actions.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let actions = job_actions.clone();

        Box::pin(async move {
            if let Err(e) = process_expired_bans(&db, actions.as_ref(), Utc::now()).await {
                tracing::error!("Error processing expired bans: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Ban expiry scheduler started");

    Ok(scheduler)
}

/// Lifts every ban expired at `now`
///
/// A ban record is removed once Discord confirms the ban is gone, including when a
/// moderator already lifted it. Other failures keep the record for the next run.
///
/// # Returns
/// - `Ok(usize)`: Number of ban records removed
/// - `Err(AppError)`: Database error while listing expired bans
pub async fn process_expired_bans(
    db: &DatabaseConnection,
    actions: &dyn ModerationActions,
    now: DateTime<Utc>,
) -> Result<usize, AppError> {
    let temp_ban_repo = TempBanRepository::new(db);
    let expired = temp_ban_repo.get_expired(now).await?;

    let mut lifted = 0;

    for ban in expired {
        match actions
            .unban_user(ban.guild_id, ban.user_id, UNBAN_REASON)
            .await
        {
            Ok(true) => {
                tracing::info!(
                    "Lifted ban for user {} in guild {} (expired {}, banned for: {})",
                    ban.user_id,
                    ban.guild_id,
                    ban.expires_at,
                    ban.reason
                );
            }
            Ok(false) => {
                tracing::info!(
                    "Ban for user {} in guild {} was already lifted",
                    ban.user_id,
                    ban.guild_id
                );
            }
            Err(e) => {
                tracing::error!(
                    "Failed to lift ban for user {} in guild {}: {}",
                    ban.user_id,
                    ban.guild_id,
                    e
                );
                continue;
            }
        }

        if let Err(e) = temp_ban_repo.delete(ban.guild_id, ban.user_id).await {
            tracing::error!(
                "Failed to remove ban record for user {} in guild {}: {}",
                ban.user_id,
                ban.guild_id,
                e
            );
            continue;
        }

        lifted += 1;
    }

    Ok(lifted)
}
