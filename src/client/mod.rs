pub mod config;
pub mod http;

pub use config::{ClientConfig, DEFAULT_AUTH_TOKEN, DEFAULT_TIMEOUT};
pub use http::{ClientError, HttpTransport, NOTIFICATIONS_PATH};

use crate::domain::LogRecord;
use tracing::debug;

/// Client for the notifications logging API.
///
/// One instance holds the connection configuration and a pooled HTTP
/// transport; every operation is a single blocking request/response
/// exchange with no retries. Calls take `&self`, so one client can be
/// shared freely across threads.
#[derive(Debug)]
pub struct LogClient {
    transport: HttpTransport,
}

impl LogClient {
    /// An empty `auth_token` falls back to [`DEFAULT_AUTH_TOKEN`].
    pub fn new(base_url: impl Into<String>, auth_token: &str) -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::new(base_url, auth_token))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Submits one log record and returns the raw response body.
    ///
    /// The record is normalized first (see [`LogRecord::normalized`]); a
    /// record that cannot be serialized is a hard failure, since there is
    /// no payload to send.
    pub fn submit(&self, record: LogRecord) -> Result<String, ClientError> {
        let record = record.normalized();
        let payload = serde_json::to_string(&record)?;

        debug!(
            level = record.level.code(),
            category = record.category.code(),
            "submitting log record"
        );

        self.transport.dispatch("post", "", Some(payload))
    }

    /// Lists log entries, paginated.
    pub fn list(&self, per_page: u32, page: u32) -> Result<String, ClientError> {
        self.transport.dispatch("get", &list_query(per_page, page), None)
    }

    /// Fetches a single log entry by id.
    pub fn get_by_id(&self, id: u64) -> Result<String, ClientError> {
        self.transport.dispatch("get", &format!("/{id}"), None)
    }

    /// Deletes a single log entry by id.
    pub fn delete_by_id(&self, id: u64) -> Result<String, ClientError> {
        self.transport.dispatch("delete", &format!("/{id}"), None)
    }
}

fn list_query(per_page: u32, page: u32) -> String {
    format!("?page={page}&per_page={per_page}")
}
