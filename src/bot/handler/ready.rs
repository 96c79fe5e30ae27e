//! Ready event handler for bot initialization.
//!
//! Fired once the gateway handshake completes. Slash commands are registered globally
//! here on every start so the registered set always matches the running build.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used to register the slash commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord, serving {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    match Command::set_global_commands(&ctx.http, command::all()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
