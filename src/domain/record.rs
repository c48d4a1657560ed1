use super::{CategoryCode, LevelCode};
use serde::{Deserialize, Serialize};

/// One structured log record, built per call and submitted to the
/// notifications API.
///
/// Field names match the JSON body of the submit endpoint exactly.
/// Connection details (endpoint, auth token) live on
/// [`ClientConfig`](crate::client::ClientConfig) and can never end up in a
/// serialized record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LevelCode,
    pub category: CategoryCode,
    pub message: String,
    pub context: Vec<String>,
    pub env: String,
    pub hostname: String,
    pub namespace: String,
    pub origin: String,
    pub binary: String,
    pub user: String,
}

impl LogRecord {
    /// Returns the record with `level` and `category` normalized per the
    /// API's submit rule (see [`LevelCode::normalized`]).
    pub fn normalized(mut self) -> Self {
        self.level = self.level.normalized();
        self.category = self.category.normalized();
        self
    }
}
