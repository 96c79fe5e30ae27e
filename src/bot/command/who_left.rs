//! `/wholeft`: who was the last to leave the caller's voice channel.

use chrono::{DateTime, Utc};
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
    Timestamp,
};

use crate::{
    error::AppError,
    model::{voice::VoiceAction, voice_log::VoiceLog},
    service::voice_log::VoiceLogService,
    state::AppState,
    util::time::format_elapsed,
};

pub const NAME: &str = "wholeft";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Find who most recently left the voice channel you are in")
}

/// Looks up the latest departure from the caller's current voice channel.
///
/// Callers outside a voice channel get an ephemeral refusal. Store faults are reported
/// as "try again later" instead of being mistaken for an empty log.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    let Some((guild_id, channel_id, channel_name)) = caller_voice_channel(ctx, command) else {
        command
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content("You need to be in a voice channel to ask that 🙄")
                        .ephemeral(true),
                ),
            )
            .await?;
        return Ok(());
    };

    command.defer(&ctx.http).await?;

    let service = VoiceLogService::new(&state.store);
    let embed = match service.last_departure(channel_id, guild_id).await {
        Ok(Some(log)) => CreateEmbed::new()
            .title("🔍 Found them!")
            .description(departure_description(&log, &channel_name, Utc::now()))
            .colour(0x00FF00)
            .timestamp(Timestamp::now())
            .footer(
                CreateEmbedFooter::new(format!("Requested by {}", command.user.tag()))
                    .icon_url(command.user.face()),
            ),
        Ok(None) => CreateEmbed::new()
            .title("🤔 No record")
            .description(format!(
                "Nobody has left **{}** recently",
                channel_name
            ))
            .colour(0xFFA500)
            .timestamp(Timestamp::now()),
        Err(e) => {
            tracing::error!("Failed to look up last departure from {}: {}", channel_id, e);
            CreateEmbed::new()
                .title("❌ Error")
                .description("Something went wrong while looking that up, please try again later")
                .colour(0xFF0000)
                .timestamp(Timestamp::now())
        }
    };

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await?;

    Ok(())
}

/// Resolves the caller's guild, voice channel ID and channel name from the cache.
fn caller_voice_channel(ctx: &Context, command: &CommandInteraction) -> Option<(u64, u64, String)> {
    let guild_id = command.guild_id?;
    let guild = ctx.cache.guild(guild_id)?;

    let channel_id = guild.voice_states.get(&command.user.id)?.channel_id?;
    let channel_name = guild
        .channels
        .get(&channel_id)
        .map(|channel| channel.name.clone())
        .unwrap_or_else(|| channel_id.to_string());

    Some((guild_id.get(), channel_id.get(), channel_name))
}

fn departure_description(log: &VoiceLog, channel_name: &str, now: DateTime<Utc>) -> String {
    let action = match log.action {
        VoiceAction::Move => format!(
            "moved to **{}**",
            log.new_channel_name.as_deref().unwrap_or("another channel")
        ),
        _ => "left".to_string(),
    };

    format!(
        "The last one to leave **{}** was:\n\n👤 **{}**\n🚪 {}\n⏰ {} ({})",
        channel_name,
        log.username,
        action,
        format_elapsed(log.timestamp, now),
        log.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::fixture;

    #[test]
    fn describes_move_with_target_channel() {
        let log = VoiceLog::from_entity(fixture::voice_log::entity()).unwrap();
        let now = log.timestamp + Duration::hours(3);

        let text = departure_description(&log, "Lobby", now);

        assert!(text.contains("**Lobby**"));
        assert!(text.contains("👤 **Test Member**"));
        assert!(text.contains("moved to **Raid**"));
        assert!(text.contains("3 hours ago"));
        assert!(text.contains("2025-01-01 12:00:00 UTC"));
    }

    #[test]
    fn describes_leave() {
        let entity = fixture::voice_log::entity_builder()
            .action("leave")
            .new_channel(None)
            .build();
        let log = VoiceLog::from_entity(entity).unwrap();

        let text = departure_description(&log, "Lobby", log.timestamp);

        assert!(text.contains("🚪 left"));
        assert!(text.contains("just now"));
    }
}
