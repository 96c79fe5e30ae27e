mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod store;
mod util;

use crate::{
    config::Config, error::AppError, scheduler::heartbeat, service::map_rotation::MapRotationService,
    state::AppState, store::Store,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let store = Store::new(config.store.clone());
    if let Err(e) = store.connect().await {
        // The bot still serves commands, voice logging retries lazily on the next event.
        tracing::warn!("Starting without voice log store: {}", e);
    }

    let mut scheduler = if store.is_enabled() {
        Some(heartbeat::start_scheduler(store.clone()).await?)
    } else {
        None
    };

    let http_client = startup::setup_reqwest_client()?;
    let map_rotation = MapRotationService::new(http_client, config.apex_api_key.clone());
    let state = AppState::new(store.clone(), map_rotation);

    let client = bot::start::init_bot(&config, state).await?;
    let shard_manager = client.shard_manager.clone();

    tokio::select! {
        result = bot::start::start_bot(client) => {
            if let Err(e) = result {
                tracing::error!("Discord bot error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
            shard_manager.shutdown_all().await;
        }
    }

    if let Some(scheduler) = scheduler.as_mut() {
        if let Err(e) = scheduler.shutdown().await {
            tracing::warn!("Failed to stop heartbeat scheduler: {}", e);
        }
    }
    store.disconnect().await;

    tracing::info!("Shut down cleanly");

    Ok(())
}
