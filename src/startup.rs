use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Timeout for outbound HTTP requests such as the map rotation lookup.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with outbound HTTP requests.
const USER_AGENT: &str = "Discord Bot - Tyr";

/// Installs the global tracing subscriber.
///
/// Filters come from `RUST_LOG` and default to `info`. SQL statement logging from sqlx is
/// switched off at the connection level instead.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the shared HTTP client for external APIs.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with timeout and user agent set
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;

    Ok(client)
}
