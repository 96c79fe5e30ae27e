use serenity::all::{Context, Guild};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// Only new joins are logged at info level, guilds becoming available on startup are debug.
pub async fn handle_guild_create(_ctx: Context, guild: Guild, is_new: Option<bool>) {
    if is_new.unwrap_or(false) {
        tracing::info!(
            "Joined guild {} ({}) with {} members",
            guild.name,
            guild.id,
            guild.member_count
        );
    } else {
        tracing::debug!("Guild available: {} ({})", guild.name, guild.id);
    }
}
