use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::Database, error::AppError};

/// Creates the scheduler that commits the database every minute.
///
/// The scheduler is returned unstarted; the bot starts it once the gateway is ready and
/// shuts it down on exit.
///
/// # Arguments
/// - `db`: Database to commit
pub async fn create_scheduler(db: Database) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = db.commit().await {
                tracing::error!("Error committing database: {}", e);
            } else {
                tracing::trace!("Committed database");
            }
        })
    })?;

    scheduler.add(job).await?;

    Ok(scheduler)
}
