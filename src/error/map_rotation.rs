use thiserror::Error;

/// Failures of the map rotation lookup.
///
/// Each variant carries its own user-facing reply through [`MapRotationError::user_message`]
/// so the slash command never shows raw HTTP errors to members.
#[derive(Error, Debug)]
pub enum MapRotationError {
    /// `APEX_STATUS_API_KEY` was not provided at startup.
    #[error("Map rotation API key is not configured")]
    MissingApiKey,

    /// The request did not complete within the client timeout.
    #[error("Map rotation request timed out")]
    Timeout,

    /// The API rejected the configured key.
    #[error("Map rotation API rejected the API key")]
    Unauthorized,

    /// The API is rate limiting this bot.
    #[error("Map rotation API rate limit exceeded")]
    RateLimited,

    /// The API answered with an unexpected status.
    #[error("Map rotation API responded with status {0}")]
    UnexpectedStatus(u16),

    /// Transport or decoding failure.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl MapRotationError {
    /// Reply shown to the member who ran the command.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingApiKey => {
                "❌ The map rotation API key is not configured, please contact an administrator."
            }
            Self::Timeout => "⏰ The request timed out, please try again later.",
            Self::Unauthorized => "🔑 The map rotation API key is invalid, please contact an administrator.",
            Self::RateLimited => "🚫 Too many map rotation requests, please try again later.",
            Self::UnexpectedStatus(_) | Self::Request(_) => {
                "❌ Map rotation is unavailable right now, please try again later."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishes_rate_limit_from_generic_failure() {
        assert_ne!(
            MapRotationError::RateLimited.user_message(),
            MapRotationError::UnexpectedStatus(500).user_message()
        );
    }

    #[test]
    fn unexpected_status_mentions_code() {
        let err = MapRotationError::UnexpectedStatus(503);

        assert_eq!(err.to_string(), "Map rotation API responded with status 503");
    }
}
