use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, Timestamp,
};

use crate::{error::AppError, state::AppState, store::ConnectionInfo};

pub const NAME: &str = "dbstatus";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Check the voice log database connection")
}

/// Replies with the store's connection state, visible only to the caller.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    let info = state.store.connection_info();
    let embed = status_embed(&info, state.store.is_enabled());

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

fn status_embed(info: &ConnectionInfo, enabled: bool) -> CreateEmbed {
    let connected = info.state == crate::store::ConnectionState::Connected;

    CreateEmbed::new()
        .title("🗄️ Database Status")
        .colour(if connected { 0x00FF00 } else { 0xFF0000 })
        .field("Connection", connection_label(connected, enabled), true)
        .field("State", info.description.clone(), true)
        .field("Reconnect attempts", info.reconnect_attempts.to_string(), true)
        .field(
            "Heartbeat",
            if info.heartbeat_active {
                "✅ Running"
            } else {
                "❌ Stopped"
            },
            true,
        )
        .timestamp(Timestamp::now())
}

fn connection_label(connected: bool, enabled: bool) -> &'static str {
    match (connected, enabled) {
        (true, _) => "✅ Connected",
        (false, true) => "❌ Not connected",
        (false, false) => "⚪ Disabled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_disabled_store_separately() {
        assert_eq!(connection_label(true, true), "✅ Connected");
        assert_eq!(connection_label(false, true), "❌ Not connected");
        assert_eq!(connection_label(false, false), "⚪ Disabled");
    }
}
