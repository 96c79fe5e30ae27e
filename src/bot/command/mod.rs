//! Slash commands.
//!
//! Each command module exposes `NAME`, a `register()` builder used when commands are synced
//! on ready, and a `run()` that answers the interaction.

pub mod apex_map;
pub mod db_status;
pub mod hello;
pub mod info;
pub mod ping;
pub mod who_left;

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{error::AppError, state::AppState};

/// Every command registered on ready.
pub fn all() -> Vec<CreateCommand> {
    vec![
        ping::register(),
        info::register(),
        hello::register(),
        apex_map::register(),
        who_left::register(),
        db_status::register(),
    ]
}

/// Routes a slash command to its handler.
///
/// # Returns
/// - `Ok(())` - The command replied
/// - `Err(AppError::BadRequest)` - Unknown command name
/// - `Err(AppError)` - The reply could not be sent
pub async fn dispatch(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        ping::NAME => ping::run(ctx, command).await,
        info::NAME => info::run(ctx, command, state).await,
        hello::NAME => hello::run(ctx, command).await,
        apex_map::NAME => apex_map::run(ctx, command, state).await,
        who_left::NAME => who_left::run(ctx, command, state).await,
        db_status::NAME => db_status::run(ctx, command, state).await,
        other => Err(AppError::BadRequest(format!("Unknown command /{}", other))),
    }
}

/// Gateway heartbeat latency of the shard that received the interaction.
pub(crate) async fn shard_latency(ctx: &Context) -> Option<std::time::Duration> {
    let manager = {
        let data = ctx.data.read().await;
        data.get::<crate::bot::start::ShardManagerContainer>()?.clone()
    };

    let runners = manager.runners.lock().await;
    runners.get(&ctx.shard_id).and_then(|runner| runner.latency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_command() {
        assert_eq!(all().len(), 6);
    }
}
