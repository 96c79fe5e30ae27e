use serenity::all::{Context, EventHandler, Guild, Interaction, Ready, VoiceState};
use serenity::async_trait;

use crate::state::AppState;

pub mod guild;
pub mod interaction;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(ctx, guild, is_new).await;
    }

    /// Called when a member joins, leaves, moves between or toggles state in a voice channel
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.state, ctx, old, new).await;
    }

    /// Called when a slash command is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }
}
