use super::ClientConfig;
use reqwest::blocking::{Client, ClientBuilder, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use thiserror::Error;
use tracing::debug;

/// Fixed path every operation targets, relative to the base URL.
pub const NOTIFICATIONS_PATH: &str = "/api/notifications";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Blocking HTTP transport for the notifications API.
///
/// Holds one pooled reqwest client for the lifetime of the owning
/// [`LogClient`](super::LogClient); connections are reused across calls.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
    notifications_url: String,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let client = ClientBuilder::new()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                ClientError::InvalidConfig(format!("Failed to build HTTP client: {e}"))
            })?;

        let notifications_url = format!(
            "{}{NOTIFICATIONS_PATH}",
            config.base_url.trim_end_matches('/')
        );

        Ok(Self {
            client,
            config,
            notifications_url,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Performs one request against the notifications endpoint and returns
    /// the raw response body.
    ///
    /// `tail` is appended to the endpoint for GET and DELETE (an id segment
    /// or a query string) and ignored for POST; `body` is the reverse.
    /// Methods outside {get, post, delete} fail before any network I/O.
    /// A non-success HTTP status is not an error; its body is returned like
    /// any other.
    pub fn dispatch(
        &self,
        method: &str,
        tail: &str,
        body: Option<String>,
    ) -> Result<String, ClientError> {
        let request = match method {
            "get" => self.client.get(format!("{}{tail}", self.notifications_url)),
            "post" => self
                .client
                .post(&self.notifications_url)
                .header(CONTENT_TYPE, "application/json; charset=utf-8")
                .body(body.unwrap_or_default()),
            "delete" => self
                .client
                .delete(format!("{}{tail}", self.notifications_url)),
            other => return Err(ClientError::UnknownMethod(other.to_string())),
        };

        let response = self.authorized(request).send()?;
        let status = response.status();
        let body = response.text()?;

        debug!(%method, %tail, status = status.as_u16(), "notifications API call completed");

        Ok(body)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, &self.config.auth_token)
    }
}
