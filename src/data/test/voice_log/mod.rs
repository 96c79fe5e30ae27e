use crate::data::voice_log::VoiceLogRepository;
use crate::model::{
    voice::{VoiceAction, VoiceChannelRef, VoiceGuild, VoiceMember},
    voice_log::CreateVoiceLogParam,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::voice_log::VoiceLogFactory};

mod create;
mod find_last_departure;
mod get_channel_history;
mod get_user_history;

fn member(id: u64, name: &str) -> VoiceMember {
    VoiceMember {
        id,
        display_name: name.to_string(),
        bot: false,
    }
}

fn channel(id: u64, name: &str) -> VoiceChannelRef {
    VoiceChannelRef {
        id,
        name: name.to_string(),
    }
}

fn guild(id: u64) -> VoiceGuild {
    VoiceGuild {
        id,
        name: format!("Guild {}", id),
    }
}
