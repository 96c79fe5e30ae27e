//! Voice log factory for inserting test voice transition rows.
//!
//! Rows are written straight through the entity so tests can control the timestamp,
//! which the bot itself always assigns at write time.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test voice log rows with customizable fields.
///
/// Defaults to a `join` of a freshly numbered member into a freshly numbered channel in a
/// freshly numbered guild, timestamped now.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::voice_log::VoiceLogFactory;
///
/// let row = VoiceLogFactory::new(&db)
///     .user(1, "Alice")
///     .moved((10, "Lobby"), (20, "Raid"))
///     .guild(99, "Guild")
///     .timestamp(Utc::now() - Duration::minutes(5))
///     .build()
///     .await?;
/// ```
pub struct VoiceLogFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    username: String,
    timestamp: DateTime<Utc>,
    previous_channel: Option<(String, String)>,
    new_channel: Option<(String, String)>,
    action: String,
    guild_id: String,
    guild_name: String,
}

impl<'a> VoiceLogFactory<'a> {
    /// Creates a new VoiceLogFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented, username: `"Member {id}"`
    /// - action: `"join"` into channel `"Channel {id}"`
    /// - guild_id: auto-incremented, guild_name: `"Guild {id}"`
    /// - timestamp: `Utc::now()`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            username: format!("Member {}", id),
            timestamp: Utc::now(),
            previous_channel: None,
            new_channel: Some((id.to_string(), format!("Channel {}", id))),
            action: "join".to_string(),
            guild_id: id.to_string(),
            guild_name: format!("Guild {}", id),
        }
    }

    /// Sets the member ID and display name.
    pub fn user(mut self, user_id: u64, username: impl Into<String>) -> Self {
        self.user_id = user_id.to_string();
        self.username = username.into();
        self
    }

    /// Sets the guild ID and name.
    pub fn guild(mut self, guild_id: u64, guild_name: impl Into<String>) -> Self {
        self.guild_id = guild_id.to_string();
        self.guild_name = guild_name.into();
        self
    }

    /// Sets the write timestamp.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Makes the row a `join` into the given channel.
    pub fn join(mut self, channel_id: u64, channel_name: impl Into<String>) -> Self {
        self.action = "join".to_string();
        self.previous_channel = None;
        self.new_channel = Some((channel_id.to_string(), channel_name.into()));
        self
    }

    /// Makes the row a `leave` from the given channel.
    pub fn leave(mut self, channel_id: u64, channel_name: impl Into<String>) -> Self {
        self.action = "leave".to_string();
        self.previous_channel = Some((channel_id.to_string(), channel_name.into()));
        self.new_channel = None;
        self
    }

    /// Makes the row a `move` between the two `(id, name)` channels.
    pub fn moved(mut self, from: (u64, &str), to: (u64, &str)) -> Self {
        self.action = "move".to_string();
        self.previous_channel = Some((from.0.to_string(), from.1.to_string()));
        self.new_channel = Some((to.0.to_string(), to.1.to_string()));
        self
    }

    /// Builds and inserts the voice log row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::voice_log::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::voice_log::Model, DbErr> {
        let (previous_channel_id, previous_channel_name) = self.previous_channel.unzip();
        let (new_channel_id, new_channel_name) = self.new_channel.unzip();

        entity::voice_log::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            timestamp: ActiveValue::Set(self.timestamp),
            previous_channel_id: ActiveValue::Set(previous_channel_id),
            previous_channel_name: ActiveValue::Set(previous_channel_name),
            new_channel_id: ActiveValue::Set(new_channel_id),
            new_channel_name: ActiveValue::Set(new_channel_name),
            action: ActiveValue::Set(self.action),
            guild_id: ActiveValue::Set(self.guild_id),
            guild_name: ActiveValue::Set(self.guild_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a voice log row with default values.
///
/// Shorthand for `VoiceLogFactory::new(db).build().await`.
pub async fn create_voice_log(
    db: &DatabaseConnection,
) -> Result<entity::voice_log::Model, DbErr> {
    VoiceLogFactory::new(db).build().await
}
