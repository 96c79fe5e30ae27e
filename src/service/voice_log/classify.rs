//! Voice state transition classification.

use crate::model::voice::{VoiceAction, VoiceChannelRef, VoiceMember};

/// Decides which action, if any, a voice state change represents.
///
/// Only channel membership matters. Mute, deafen, camera and stream toggles keep the same
/// channel on both sides and come back as `None`, as does any change made by a bot.
///
/// # Arguments
/// - `previous` - Channel before the change, `None` when not in voice
/// - `next` - Channel after the change, `None` when not in voice
/// - `actor` - Member whose state changed
///
/// # Returns
/// - `Some(VoiceAction)` - The transition should be recorded
/// - `None` - Nothing to record
pub fn classify(
    previous: Option<&VoiceChannelRef>,
    next: Option<&VoiceChannelRef>,
    actor: &VoiceMember,
) -> Option<VoiceAction> {
    if actor.bot {
        return None;
    }

    match (previous, next) {
        (None, Some(_)) => Some(VoiceAction::Join),
        (Some(_), None) => Some(VoiceAction::Leave),
        (Some(previous), Some(next)) if previous.id != next.id => Some(VoiceAction::Move),
        _ => None,
    }
}
