use serenity::all::{Context, Interaction};

use crate::{bot::command, state::AppState};

/// Handles interactions, dispatching slash commands by name.
///
/// Command failures are logged here; each command already replied to the member where
/// it could.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Received command /{} from {} in guild {:?}",
        command.data.name,
        command.user.name,
        command.guild_id
    );

    if let Err(e) = command::dispatch(&ctx, &command, state).await {
        tracing::error!("Command /{} failed: {}", command.data.name, e);
    }
}
