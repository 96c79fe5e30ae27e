use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, store::Store};

/// Cron expression for the store heartbeat, every 30 seconds.
static HEARTBEAT_SCHEDULE: &str = "*/30 * * * * *";

/// Starts the voice log store heartbeat.
///
/// Every 30 seconds the job pings the store. A failed ping hands over to the store's
/// reconnect loop, see [`Store::heartbeat`]. The returned scheduler must be kept alive and
/// shut down on exit.
///
/// # Arguments
/// - `store`: Store to keep alive
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler
/// - `Err(AppError::SchedulerErr)`: Job creation or scheduler start failed
pub async fn start_scheduler(store: Store) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_store = store.clone();
    let job = Job::new_async(HEARTBEAT_SCHEDULE, move |_uuid, _lock| {
        let store = job_store.clone();

        Box::pin(async move {
            store.heartbeat().await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    store.set_heartbeat_active(true);
    tracing::info!("Voice log store heartbeat started");

    Ok(scheduler)
}
