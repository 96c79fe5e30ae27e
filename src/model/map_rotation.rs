//! Map rotation payloads returned by the Apex Legends status API (version 2).

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Playlist the `apexmap` command can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Battle royale pubs.
    Normal,
    Ranked,
}

impl GameMode {
    /// Value used as the slash command choice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Ranked => "ranked",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Battle Royale",
            Self::Ranked => "Ranked",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Normal => "🎮",
            Self::Ranked => "🏆",
        }
    }

    /// Embed colour for the mode, orange for pubs and purple for ranked.
    pub fn colour(&self) -> u32 {
        match self {
            Self::Normal => 0xFF6B35,
            Self::Ranked => 0x9B59B6,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "ranked" => Ok(Self::Ranked),
            other => Err(format!("Unknown game mode '{}'", other)),
        }
    }
}

/// Top-level response of `/maprotation?version=2`.
///
/// The `ltm` rotation is left out, unknown fields are skipped on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct MapRotationResponse {
    pub battle_royale: MapRotation,
    pub ranked: MapRotation,
}

impl MapRotationResponse {
    /// Rotation for the requested playlist.
    pub fn for_mode(&self, mode: GameMode) -> &MapRotation {
        match mode {
            GameMode::Normal => &self.battle_royale,
            GameMode::Ranked => &self.ranked,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapRotation {
    pub current: MapInfo,
    pub next: MapInfo,
}

/// One slot of a rotation.
#[derive(Debug, Clone, Deserialize)]
pub struct MapInfo {
    pub map: String,
    #[serde(rename = "readableDate_start", default)]
    pub readable_date_start: String,
    #[serde(rename = "readableDate_end", default)]
    pub readable_date_end: String,
    #[serde(rename = "DurationInMinutes", default)]
    pub duration_in_minutes: u32,
    /// Only present on the current slot.
    #[serde(rename = "remainingTimer", default)]
    pub remaining_timer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "battle_royale": {
            "current": {
                "start": 1735732800, "end": 1735738200,
                "readableDate_start": "2025-01-01 12:00:00",
                "readableDate_end": "2025-01-01 13:30:00",
                "map": "World's Edge", "code": "worlds_edge_rotation",
                "DurationInSecs": 5400, "DurationInMinutes": 90,
                "asset": "https://example.invalid/we.png",
                "remainingSecs": 600, "remainingMins": 10,
                "remainingTimer": "00:10:00"
            },
            "next": {
                "start": 1735738200, "end": 1735743600,
                "readableDate_start": "2025-01-01 13:30:00",
                "readableDate_end": "2025-01-01 15:00:00",
                "map": "Olympus", "code": "olympus_rotation",
                "DurationInSecs": 5400, "DurationInMinutes": 90,
                "asset": "https://example.invalid/ol.png"
            }
        },
        "ranked": {
            "current": {
                "readableDate_start": "2025-01-01 00:00:00",
                "readableDate_end": "2025-01-02 00:00:00",
                "map": "Storm Point", "DurationInMinutes": 1440,
                "remainingTimer": "12:00:00"
            },
            "next": {
                "readableDate_start": "2025-01-02 00:00:00",
                "readableDate_end": "2025-01-03 00:00:00",
                "map": "Broken Moon", "DurationInMinutes": 1440
            }
        },
        "ltm": {
            "current": { "map": "Habitat", "eventName": "Gun Run" },
            "next": { "map": "Skulltown", "eventName": "Gun Run" }
        }
    }"#;

    #[test]
    fn deserializes_version_two_payload() {
        let response: MapRotationResponse = serde_json::from_str(SAMPLE).unwrap();

        let normal = response.for_mode(GameMode::Normal);
        assert_eq!(normal.current.map, "World's Edge");
        assert_eq!(normal.current.remaining_timer.as_deref(), Some("00:10:00"));
        assert_eq!(normal.next.map, "Olympus");
        assert!(normal.next.remaining_timer.is_none());

        let ranked = response.for_mode(GameMode::Ranked);
        assert_eq!(ranked.current.duration_in_minutes, 1440);
    }

    #[test]
    fn parses_command_choice() {
        assert_eq!("ranked".parse::<GameMode>(), Ok(GameMode::Ranked));
        assert_eq!(GameMode::Normal.as_str(), "normal");
        assert!("arenas".parse::<GameMode>().is_err());
    }
}
