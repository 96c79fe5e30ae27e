use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage, Timestamp,
};

use crate::{
    bot::command::{self, shard_latency},
    error::AppError,
    state::AppState,
};

pub const NAME: &str = "info";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Get information about the bot")
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    let latency = shard_latency(ctx)
        .await
        .map(|latency| format!("{}ms", latency.as_millis()))
        .unwrap_or_else(|| "n/a".to_string());
    let uptime_minutes = state.started_at.elapsed().as_secs() / 60;

    let embed = CreateEmbed::new()
        .title("🤖 Bot Information")
        .description("Tyr - a Discord bot keeping an eye on your voice channels")
        .field("📊 Servers", ctx.cache.guild_count().to_string(), true)
        .field("👥 Users", ctx.cache.user_count().to_string(), true)
        .field("📱 Commands", command::all().len().to_string(), true)
        .field("🔗 Ping", latency, true)
        .field("⏰ Uptime", format!("{} minutes", uptime_minutes), true)
        .field("🏷️ Version", env!("CARGO_PKG_VERSION"), true)
        .colour(0x0099FF)
        .timestamp(Timestamp::now())
        .footer(
            CreateEmbedFooter::new(format!("Requested by {}", command.user.tag()))
                .icon_url(command.user.face()),
        );

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await?;

    Ok(())
}
