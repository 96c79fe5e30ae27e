//! Voice presence snapshots and the actions derived from them.
//!
//! The gateway hands us loosely filled voice states: the channel, the member and the guild
//! can each be missing depending on cache state and on which side of the transition we are
//! looking at. `VoicePresence` spells those optional parts out so the classifier only has
//! to deal with `Option`s.

use std::fmt;
use std::str::FromStr;

/// Kind of voice channel membership change worth recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceAction {
    /// Member entered a voice channel from no channel.
    Join,
    /// Member left voice entirely.
    Leave,
    /// Member switched from one voice channel to another.
    Move,
}

impl VoiceAction {
    /// Actions that take a member out of their previous channel.
    pub const DEPARTURES: [VoiceAction; 2] = [VoiceAction::Leave, VoiceAction::Move];

    /// Stored representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Leave => "leave",
            Self::Move => "move",
        }
    }

    /// Checks the channel shape a record of this action must have.
    ///
    /// Join has only a new channel, leave only a previous one, move has both and they
    /// differ.
    pub fn fits_channels(&self, previous: Option<u64>, next: Option<u64>) -> bool {
        match (self, previous, next) {
            (Self::Join, None, Some(_)) => true,
            (Self::Leave, Some(_), None) => true,
            (Self::Move, Some(previous), Some(next)) => previous != next,
            _ => false,
        }
    }
}

impl fmt::Display for VoiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "join" => Ok(Self::Join),
            "leave" => Ok(Self::Leave),
            "move" => Ok(Self::Move),
            other => Err(format!("Unknown voice action '{}'", other)),
        }
    }
}

/// A voice channel as seen at event time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannelRef {
    pub id: u64,
    pub name: String,
}

/// The member whose voice state changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceMember {
    pub id: u64,
    /// Guild nickname, global display name or username, whichever is set first.
    pub display_name: String,
    pub bot: bool,
}

/// The guild the voice state belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceGuild {
    pub id: u64,
    pub name: String,
}

/// One side of a voice state transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoicePresence {
    pub channel: Option<VoiceChannelRef>,
    pub member: Option<VoiceMember>,
    pub guild: Option<VoiceGuild>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_actions() {
        for action in [VoiceAction::Join, VoiceAction::Leave, VoiceAction::Move] {
            assert_eq!(action.as_str().parse::<VoiceAction>(), Ok(action));
        }
        assert!("mute".parse::<VoiceAction>().is_err());
    }

    #[test]
    fn only_leave_and_move_are_departures() {
        assert!(!VoiceAction::DEPARTURES.contains(&VoiceAction::Join));
        assert!(VoiceAction::DEPARTURES.contains(&VoiceAction::Leave));
        assert!(VoiceAction::DEPARTURES.contains(&VoiceAction::Move));
    }

    #[test]
    fn channel_shape_matches_action() {
        assert!(VoiceAction::Join.fits_channels(None, Some(1)));
        assert!(!VoiceAction::Join.fits_channels(Some(1), Some(2)));
        assert!(VoiceAction::Leave.fits_channels(Some(1), None));
        assert!(!VoiceAction::Leave.fits_channels(None, None));
        assert!(VoiceAction::Move.fits_channels(Some(1), Some(2)));
        assert!(!VoiceAction::Move.fits_channels(Some(1), Some(1)));
    }
}
