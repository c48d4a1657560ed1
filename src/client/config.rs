use super::ClientError;
use std::time::Duration;
use url::Url;

/// Token substituted when the caller hands over an empty auth token.
pub const DEFAULT_AUTH_TOKEN: &str = "logger";

/// Connect/read/write timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_token: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, auth_token: &str) -> Self {
        let auth_token = if auth_token.is_empty() {
            DEFAULT_AUTH_TOKEN.to_string()
        } else {
            auth_token.to_string()
        };

        Self {
            base_url: base_url.into(),
            auth_token,
            connect_timeout: DEFAULT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("notilog/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidConfig(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;
        Ok(())
    }
}
