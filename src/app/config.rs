use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Verbosity of the client's own diagnostics, not the level of submitted
/// entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Client for the notifications logging API", long_about = None)]
pub struct Config {
    /// Base URL of the logging API
    #[arg(long, env = "NOTILOG_ENDPOINT", default_value = "http://localhost:8080")]
    pub endpoint: String,

    /// Authorization token sent with every request (empty selects the
    /// built-in default)
    #[arg(long, env = "NOTILOG_TOKEN", default_value = "")]
    pub auth_token: String,

    /// Request timeout in seconds
    #[arg(long, env = "NOTILOG_TIMEOUT_SECS", default_value = "60")]
    pub timeout_secs: u64,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Submit a log entry
    Submit {
        /// Severity code (1=debug, 2=info, 4=warning, 8=error, 16=panic)
        #[arg(long, default_value_t = 2)]
        level: u32,
        /// Category code (1=security, 2=performance, 4=business, 8=audit,
        /// 16=sql, 32=technical, 64=tracking)
        #[arg(long, default_value_t = 32)]
        category: u32,
        /// Log message
        #[arg(long)]
        message: String,
        /// Context line, repeatable
        #[arg(long = "context")]
        context: Vec<String>,
        /// Deployment environment name
        #[arg(long, default_value = "")]
        env: String,
        /// Hostname (auto-detected if not provided)
        #[arg(long)]
        hostname: Option<String>,
        /// Namespace the entry belongs to
        #[arg(long, default_value = "")]
        namespace: String,
        /// Origin of the entry
        #[arg(long, default_value = "")]
        origin: String,
        /// Name of the emitting binary
        #[arg(long, default_value = "")]
        binary: String,
        /// User on whose behalf the entry is logged
        #[arg(long, default_value = "")]
        user: String,
    },
    /// List log entries, paginated
    List {
        /// Entries per page
        #[arg(long, default_value_t = 20)]
        per_page: u32,
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Fetch a single log entry by id
    Get {
        /// Entry id
        id: u64,
    },
    /// Delete a single log entry by id
    Delete {
        /// Entry id
        id: u64,
    },
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)
            .map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.endpoint).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid endpoint URL '{}': {e}", self.endpoint))
        })?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
