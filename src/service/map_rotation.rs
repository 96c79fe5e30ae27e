//! Apex Legends map rotation lookup.

use reqwest::StatusCode;

use crate::{
    error::map_rotation::MapRotationError,
    model::map_rotation::{GameMode, MapRotation, MapRotationResponse},
};

const MAP_ROTATION_URL: &str = "https://api.mozambiquehe.re/maprotation";

/// Client for the map rotation endpoint of the Apex Legends status API.
///
/// Cheap to clone, the inner `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct MapRotationService {
    http_client: reqwest::Client,
    api_key: Option<String>,
}

impl MapRotationService {
    /// Creates the service. A missing key is reported on every lookup rather than at startup.
    pub fn new(http_client: reqwest::Client, api_key: Option<String>) -> Self {
        if api_key.is_none() {
            tracing::warn!("APEX_STATUS_API_KEY is not set, apexmap will be unavailable");
        }

        Self {
            http_client,
            api_key,
        }
    }

    /// Fetches the current and next map for a playlist.
    ///
    /// # Arguments
    /// - `mode` - Playlist to return the rotation for
    ///
    /// # Returns
    /// - `Ok(MapRotation)` - Current and next map
    /// - `Err(MapRotationError)` - Missing key, timeout, rejected key, rate limit or other failure
    pub async fn get_map_rotation(&self, mode: GameMode) -> Result<MapRotation, MapRotationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(MapRotationError::MissingApiKey)?;

        let response = self
            .http_client
            .get(MAP_ROTATION_URL)
            .query(&[("auth", api_key), ("version", "2")])
            .send()
            .await
            .map_err(map_request_error)?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => return Err(MapRotationError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => return Err(MapRotationError::RateLimited),
            status => return Err(MapRotationError::UnexpectedStatus(status.as_u16())),
        }

        let body = response
            .json::<MapRotationResponse>()
            .await
            .map_err(map_request_error)?;

        Ok(body.for_mode(mode).clone())
    }

    /// Renders a rotation as the embed description of the `apexmap` reply.
    pub fn format_rotation(rotation: &MapRotation, mode: GameMode) -> String {
        let current = &rotation.current;
        let next = &rotation.next;

        format!(
            "{} **Apex Legends {} map rotation**\n\n\
             📍 **Current map**: {}\n\
             ⏱️ **Time remaining**: {}\n\
             ⏳ **Duration**: {} minutes\n\
             🕐 **Started**: {}\n\
             🕐 **Ends**: {}\n\n\
             🔄 **Next map**: {}\n\
             ⏰ **Starts at**: {}\n\
             ⏳ **Next duration**: {} minutes",
            mode.emoji(),
            mode.label(),
            current.map,
            current.remaining_timer.as_deref().unwrap_or("calculating..."),
            current.duration_in_minutes,
            current.readable_date_start,
            current.readable_date_end,
            next.map,
            next.readable_date_start,
            next.duration_in_minutes,
        )
    }
}

fn map_request_error(err: reqwest::Error) -> MapRotationError {
    if err.is_timeout() {
        MapRotationError::Timeout
    } else {
        MapRotationError::Request(err)
    }
}
