//! Voice activity logging and lookups.
//!
//! `VoiceLogService` turns a pair of voice presence snapshots into at most one log record
//! and answers the "who left" style queries. Store outages never bubble up as panics: writes
//! are dropped with a warning and reads return a typed [`StoreError`].

pub mod classify;


use crate::{
    data::voice_log::VoiceLogRepository,
    error::store::StoreError,
    model::{
        voice::{VoiceAction, VoiceChannelRef, VoiceGuild, VoiceMember, VoicePresence},
        voice_log::{CreateVoiceLogParam, VoiceLog},
    },
    store::Store,
};

pub use classify::classify;

/// Records returned by [`VoiceLogService::user_history`] when no limit is given.
pub const DEFAULT_USER_HISTORY_LIMIT: u64 = 10;

/// Records returned by [`VoiceLogService::channel_history`] when no limit is given.
pub const DEFAULT_CHANNEL_HISTORY_LIMIT: u64 = 20;

pub struct VoiceLogService<'a> {
    store: &'a Store,
}

impl<'a> VoiceLogService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Classifies a voice state change and records it when relevant.
    ///
    /// The member and guild are taken from the new snapshot, falling back to the old one
    /// since a leave event may only carry them on one side.
    ///
    /// # Arguments
    /// - `old` - Presence before the change
    /// - `new` - Presence after the change
    ///
    /// # Returns
    /// - `Ok(Some(VoiceLog))` - The transition was recorded
    /// - `Ok(None)` - Not a join, leave or move, or the event lacked a member or guild
    /// - `Err(StoreError)` - The transition was relevant but could not be stored
    pub async fn log_voice_state_update(
        &self,
        old: &VoicePresence,
        new: &VoicePresence,
    ) -> Result<Option<VoiceLog>, StoreError> {
        let (Some(actor), Some(guild)) = (
            new.member.as_ref().or(old.member.as_ref()),
            new.guild.as_ref().or(old.guild.as_ref()),
        ) else {
            tracing::debug!("Ignoring voice state update without member or guild");
            return Ok(None);
        };

        let Some(action) = classify(old.channel.as_ref(), new.channel.as_ref(), actor) else {
            return Ok(None);
        };

        self.record(
            action,
            actor,
            old.channel.as_ref(),
            new.channel.as_ref(),
            guild,
        )
        .await
        .map(Some)
    }

    /// Appends one classified transition to the log.
    ///
    /// Nothing is queued or retried: if the store is unavailable the event is dropped.
    ///
    /// # Returns
    /// - `Ok(VoiceLog)` - The stored record
    /// - `Err(StoreError::InvalidTransition)` - Channels do not fit the action
    /// - `Err(StoreError::Disabled | StoreError::Unavailable)` - Store not reachable
    /// - `Err(StoreError::Database)` - Insert failed
    pub async fn record(
        &self,
        action: VoiceAction,
        actor: &VoiceMember,
        previous: Option<&VoiceChannelRef>,
        next: Option<&VoiceChannelRef>,
        guild: &VoiceGuild,
    ) -> Result<VoiceLog, StoreError> {
        let param = CreateVoiceLogParam::new(action, actor, previous, next, guild);
        if !param.is_consistent() {
            return Err(StoreError::InvalidTransition(action.to_string()));
        }

        let db = match self.store.database().await {
            Ok(db) => db,
            Err(e) => {
                tracing::warn!(
                    "Dropping voice {} of {} in {}: {}",
                    action,
                    actor.display_name,
                    guild.name,
                    e
                );
                return Err(e);
            }
        };

        let log = VoiceLogRepository::new(&db)
            .create(param)
            .await
            .map_err(|e| {
                tracing::error!("Failed to save voice log: {}", e);
                StoreError::from(e)
            })?;

        tracing::info!(
            "Saved voice log: {} {} ({} -> {}) in {}",
            log.username,
            log.action,
            log.previous_channel_name.as_deref().unwrap_or("-"),
            log.new_channel_name.as_deref().unwrap_or("-"),
            log.guild_name
        );

        Ok(log)
    }

    /// Finds who most recently left or moved out of a channel.
    ///
    /// # Returns
    /// - `Ok(Some(VoiceLog))` - Newest departure from the channel
    /// - `Ok(None)` - No departure recorded
    /// - `Err(StoreError)` - Store not reachable or query failed
    pub async fn last_departure(
        &self,
        channel_id: u64,
        guild_id: u64,
    ) -> Result<Option<VoiceLog>, StoreError> {
        let db = self.store.database().await?;

        VoiceLogRepository::new(&db)
            .find_last_departure(channel_id, guild_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query last departure: {}", e);
                StoreError::from(e)
            })
    }

    /// Gets a member's latest transitions, [`DEFAULT_USER_HISTORY_LIMIT`] by default.
    pub async fn user_history(
        &self,
        user_id: u64,
        guild_id: u64,
        limit: Option<u64>,
    ) -> Result<Vec<VoiceLog>, StoreError> {
        let db = self.store.database().await?;

        VoiceLogRepository::new(&db)
            .get_user_history(
                user_id,
                guild_id,
                limit.unwrap_or(DEFAULT_USER_HISTORY_LIMIT),
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to query user voice history: {}", e);
                StoreError::from(e)
            })
    }

    /// Gets a channel's latest arrivals and departures, [`DEFAULT_CHANNEL_HISTORY_LIMIT`]
    /// by default.
    pub async fn channel_history(
        &self,
        channel_id: u64,
        guild_id: u64,
        limit: Option<u64>,
    ) -> Result<Vec<VoiceLog>, StoreError> {
        let db = self.store.database().await?;

        VoiceLogRepository::new(&db)
            .get_channel_history(
                channel_id,
                guild_id,
                limit.unwrap_or(DEFAULT_CHANNEL_HISTORY_LIMIT),
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to query channel voice history: {}", e);
                StoreError::from(e)
            })
    }
}
