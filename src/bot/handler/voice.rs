//! Voice state handler feeding the voice activity log.
//!
//! Serenity hands us the cached previous state (if any) and the new state. Both are turned
//! into [`VoicePresence`] snapshots using the cache for channel, guild and member names, then
//! the voice log service decides whether anything gets written. Errors stop here: they are
//! logged and the event is dropped.

use serenity::all::{Context, Member, VoiceState};

use crate::{
    model::voice::{VoiceChannelRef, VoiceGuild, VoiceMember, VoicePresence},
    service::voice_log::VoiceLogService,
    state::AppState,
};

/// Handles a voice state change for any member in any guild.
///
/// # Arguments
/// - `state` - Shared application state holding the store
/// - `ctx` - Discord context, only the cache is read
/// - `old` - Previous voice state from the cache, `None` if the member was not in voice
/// - `new` - Voice state after the change
pub async fn handle_voice_state_update(
    state: &AppState,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let previous = old
        .as_ref()
        .map(|old| presence_from_state(&ctx, old))
        .unwrap_or_default();
    let next = presence_from_state(&ctx, &new);

    let service = VoiceLogService::new(&state.store);
    match service.log_voice_state_update(&previous, &next).await {
        Ok(Some(log)) => tracing::debug!("Recorded voice {} for user {}", log.action, log.user_id),
        Ok(None) => {}
        Err(e) => tracing::warn!("Voice state update for user {} not recorded: {}", new.user_id, e),
    }
}

/// Builds a presence snapshot from a serenity voice state and the cache.
///
/// Channel and guild names fall back to their IDs when the cache has not seen them yet.
fn presence_from_state(ctx: &Context, state: &VoiceState) -> VoicePresence {
    let Some(guild_id) = state.guild_id else {
        return VoicePresence::default();
    };

    let cached = ctx.cache.guild(guild_id).map(|guild| {
        let channel_name = state
            .channel_id
            .and_then(|id| guild.channels.get(&id))
            .map(|channel| channel.name.clone());
        let member = guild.members.get(&state.user_id).map(voice_member);

        (guild.name.clone(), channel_name, member)
    });
    let (guild_name, channel_name, cached_member) = match cached {
        Some((guild_name, channel_name, member)) => (guild_name, channel_name, member),
        None => (guild_id.to_string(), None, None),
    };

    let member = state
        .member
        .as_ref()
        .map(voice_member)
        .or(cached_member)
        .or_else(|| {
            ctx.cache.user(state.user_id).map(|user| VoiceMember {
                id: user.id.get(),
                display_name: user.display_name().to_string(),
                bot: user.bot,
            })
        });

    VoicePresence {
        channel: state.channel_id.map(|id| VoiceChannelRef {
            id: id.get(),
            name: channel_name.unwrap_or_else(|| id.to_string()),
        }),
        member,
        guild: Some(VoiceGuild {
            id: guild_id.get(),
            name: guild_name,
        }),
    }
}

fn voice_member(member: &Member) -> VoiceMember {
    VoiceMember {
        id: member.user.id.get(),
        display_name: member.display_name().to_string(),
        bot: member.user.bot,
    }
}
