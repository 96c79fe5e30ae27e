//! Voice log fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::voice_log;

/// Default test member ID.
pub const DEFAULT_USER_ID: &str = "111111111";

/// Default test member display name.
pub const DEFAULT_USERNAME: &str = "Test Member";

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "987654321";

/// Default test guild name.
pub const DEFAULT_GUILD_NAME: &str = "Test Guild";

/// Default channel the member was in before the transition.
pub const DEFAULT_PREVIOUS_CHANNEL: (&str, &str) = ("222222222", "Lobby");

/// Default channel the member is in after the transition.
pub const DEFAULT_NEW_CHANNEL: (&str, &str) = ("333333333", "Raid");

/// Fixed timestamp used by fixtures so assertions are stable.
pub fn default_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Creates a voice log entity model with default values.
///
/// The default row is a `move` from [`DEFAULT_PREVIOUS_CHANNEL`] to [`DEFAULT_NEW_CHANNEL`].
///
/// # Returns
/// - `voice_log::Model` - In-memory voice log entity
pub fn entity() -> voice_log::Model {
    entity_builder().build()
}

/// Creates a voice log entity builder for customization.
pub fn entity_builder() -> VoiceLogEntityBuilder {
    VoiceLogEntityBuilder {
        model: voice_log::Model {
            id: 1,
            user_id: DEFAULT_USER_ID.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            timestamp: default_timestamp(),
            previous_channel_id: Some(DEFAULT_PREVIOUS_CHANNEL.0.to_string()),
            previous_channel_name: Some(DEFAULT_PREVIOUS_CHANNEL.1.to_string()),
            new_channel_id: Some(DEFAULT_NEW_CHANNEL.0.to_string()),
            new_channel_name: Some(DEFAULT_NEW_CHANNEL.1.to_string()),
            action: "move".to_string(),
            guild_id: DEFAULT_GUILD_ID.to_string(),
            guild_name: DEFAULT_GUILD_NAME.to_string(),
        },
    }
}

/// Builder for in-memory voice log entity models.
pub struct VoiceLogEntityBuilder {
    model: voice_log::Model,
}

impl VoiceLogEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.model.user_id = user_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.model.username = username.into();
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.model.timestamp = timestamp;
        self
    }

    /// Sets the previous channel as an `(id, name)` pair, `None` for a join.
    pub fn previous_channel(mut self, channel: Option<(&str, &str)>) -> Self {
        self.model.previous_channel_id = channel.map(|(id, _)| id.to_string());
        self.model.previous_channel_name = channel.map(|(_, name)| name.to_string());
        self
    }

    /// Sets the new channel as an `(id, name)` pair, `None` for a leave.
    pub fn new_channel(mut self, channel: Option<(&str, &str)>) -> Self {
        self.model.new_channel_id = channel.map(|(id, _)| id.to_string());
        self.model.new_channel_name = channel.map(|(_, name)| name.to_string());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.model.action = action.into();
        self
    }

    pub fn guild(mut self, guild_id: impl Into<String>, guild_name: impl Into<String>) -> Self {
        self.model.guild_id = guild_id.into();
        self.model.guild_name = guild_name.into();
        self
    }

    pub fn build(self) -> voice_log::Model {
        self.model
    }
}
