//! Voice log repository for database operations.
//!
//! Provides the `VoiceLogRepository` for appending voice transitions and for the lookups
//! the slash commands need. The log is append-only, so there is no update or delete.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{
    voice::VoiceAction,
    voice_log::{CreateVoiceLogParam, VoiceLog},
};

/// Repository providing database operations for the voice activity log.
pub struct VoiceLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoiceLogRepository<'a> {
    /// Creates a new VoiceLogRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VoiceLogRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a voice transition, stamping it with the current time.
    ///
    /// # Arguments
    /// - `param` - Classified transition to store
    ///
    /// # Returns
    /// - `Ok(VoiceLog)` - The stored record as a domain model
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateVoiceLogParam) -> Result<VoiceLog, DbErr> {
        let (previous_channel_id, previous_channel_name) = param
            .previous_channel
            .map(|c| (c.id.to_string(), c.name))
            .unzip();
        let (new_channel_id, new_channel_name) = param
            .new_channel
            .map(|c| (c.id.to_string(), c.name))
            .unzip();

        let entity = entity::voice_log::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            username: ActiveValue::Set(param.username),
            timestamp: ActiveValue::Set(Utc::now()),
            previous_channel_id: ActiveValue::Set(previous_channel_id),
            previous_channel_name: ActiveValue::Set(previous_channel_name),
            new_channel_id: ActiveValue::Set(new_channel_id),
            new_channel_name: ActiveValue::Set(new_channel_name),
            action: ActiveValue::Set(param.action.as_str().to_string()),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            guild_name: ActiveValue::Set(param.guild_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        VoiceLog::from_entity(entity)
    }

    /// Finds the most recent record of someone leaving or moving out of a channel.
    ///
    /// # Arguments
    /// - `channel_id` - Channel that was left
    /// - `guild_id` - Guild the channel belongs to
    ///
    /// # Returns
    /// - `Ok(Some(VoiceLog))` - Newest matching departure, ties broken by highest id
    /// - `Ok(None)` - Nobody has left the channel yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_last_departure(
        &self,
        channel_id: u64,
        guild_id: u64,
    ) -> Result<Option<VoiceLog>, DbErr> {
        let departures = VoiceAction::DEPARTURES.map(|action| action.as_str());

        entity::prelude::VoiceLog::find()
            .filter(entity::voice_log::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::voice_log::Column::PreviousChannelId.eq(channel_id.to_string()))
            .filter(entity::voice_log::Column::Action.is_in(departures))
            .order_by_desc(entity::voice_log::Column::Timestamp)
            .order_by_desc(entity::voice_log::Column::Id)
            .one(self.db)
            .await?
            .map(VoiceLog::from_entity)
            .transpose()
    }

    /// Gets a member's latest transitions in a guild, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Member to look up
    /// - `guild_id` - Guild to scope the history to
    /// - `limit` - Maximum number of records returned
    ///
    /// # Returns
    /// - `Ok(Vec<VoiceLog>)` - Up to `limit` records
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_user_history(
        &self,
        user_id: u64,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<VoiceLog>, DbErr> {
        entity::prelude::VoiceLog::find()
            .filter(entity::voice_log::Column::UserId.eq(user_id.to_string()))
            .filter(entity::voice_log::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::voice_log::Column::Timestamp)
            .order_by_desc(entity::voice_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(VoiceLog::from_entity)
            .collect()
    }

    /// Gets the latest transitions into or out of a channel, newest first.
    ///
    /// # Arguments
    /// - `channel_id` - Channel matched against both the previous and the new channel
    /// - `guild_id` - Guild the channel belongs to
    /// - `limit` - Maximum number of records returned
    ///
    /// # Returns
    /// - `Ok(Vec<VoiceLog>)` - Up to `limit` records
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_channel_history(
        &self,
        channel_id: u64,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<VoiceLog>, DbErr> {
        let channel_id = channel_id.to_string();

        entity::prelude::VoiceLog::find()
            .filter(entity::voice_log::Column::GuildId.eq(guild_id.to_string()))
            .filter(
                Condition::any()
                    .add(entity::voice_log::Column::PreviousChannelId.eq(channel_id.as_str()))
                    .add(entity::voice_log::Column::NewChannelId.eq(channel_id.as_str())),
            )
            .order_by_desc(entity::voice_log::Column::Timestamp)
            .order_by_desc(entity::voice_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(VoiceLog::from_entity)
            .collect()
    }
}
