//! Domain models for the voice activity log.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::voice::{VoiceAction, VoiceChannelRef, VoiceGuild, VoiceMember};

/// A recorded voice channel transition.
///
/// Rows are append-only: once written they are never updated or deleted by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceLog {
    /// Store-assigned identity, also used to break timestamp ties.
    pub id: i32,
    pub user_id: u64,
    /// Display name at the time of the transition.
    pub username: String,
    /// Write time of the record, not the time Discord reported the change.
    pub timestamp: DateTime<Utc>,
    pub previous_channel_id: Option<u64>,
    pub previous_channel_name: Option<String>,
    pub new_channel_id: Option<u64>,
    pub new_channel_name: Option<String>,
    pub action: VoiceAction,
    pub guild_id: u64,
    pub guild_name: String,
}

impl VoiceLog {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(VoiceLog)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A stored ID or the action failed to parse
    pub fn from_entity(entity: entity::voice_log::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: parse_id("user_id", &entity.user_id)?,
            username: entity.username,
            timestamp: entity.timestamp,
            previous_channel_id: entity
                .previous_channel_id
                .as_deref()
                .map(|id| parse_id("previous_channel_id", id))
                .transpose()?,
            previous_channel_name: entity.previous_channel_name,
            new_channel_id: entity
                .new_channel_id
                .as_deref()
                .map(|id| parse_id("new_channel_id", id))
                .transpose()?,
            new_channel_name: entity.new_channel_name,
            action: entity.action.parse::<VoiceAction>().map_err(DbErr::Custom)?,
            guild_id: parse_id("guild_id", &entity.guild_id)?,
            guild_name: entity.guild_name,
        })
    }
}

fn parse_id(field: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}

/// Parameters for appending a voice transition to the log.
#[derive(Debug, Clone)]
pub struct CreateVoiceLogParam {
    pub user_id: u64,
    pub username: String,
    pub previous_channel: Option<VoiceChannelRef>,
    pub new_channel: Option<VoiceChannelRef>,
    pub action: VoiceAction,
    pub guild_id: u64,
    pub guild_name: String,
}

impl CreateVoiceLogParam {
    /// Assembles the parameters for one classified transition.
    pub fn new(
        action: VoiceAction,
        actor: &VoiceMember,
        previous: Option<&VoiceChannelRef>,
        next: Option<&VoiceChannelRef>,
        guild: &VoiceGuild,
    ) -> Self {
        Self {
            user_id: actor.id,
            username: actor.display_name.clone(),
            previous_channel: previous.cloned(),
            new_channel: next.cloned(),
            action,
            guild_id: guild.id,
            guild_name: guild.name.clone(),
        }
    }

    /// Whether the channels present agree with the action.
    pub fn is_consistent(&self) -> bool {
        self.action.fits_channels(
            self.previous_channel.as_ref().map(|c| c.id),
            self.new_channel.as_ref().map(|c| c.id),
        )
    }
}
