pub mod config;
pub mod logging;

pub use config::{Command, Config, ConfigError, LogLevel};

use crate::client::{ClientConfig, LogClient};
use crate::domain::{CategoryCode, LevelCode, LogRecord};
use anyhow::Context;
use tracing::info;

/// Runs one CLI invocation: build a client from the parsed configuration,
/// perform the requested operation, print the raw response body to stdout.
pub fn run(config: Config) -> anyhow::Result<()> {
    logging::init(config.log_level);
    config.validate()?;

    info!(
        endpoint = %config.endpoint,
        timeout_secs = config.timeout_secs,
        "notilog v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut client_config = ClientConfig::new(config.endpoint.clone(), &config.auth_token);
    client_config.connect_timeout = config.timeout();
    client_config.timeout = config.timeout();

    let client = LogClient::from_config(client_config).context("failed to build HTTP client")?;

    let body = match config.command {
        Command::Submit {
            level,
            category,
            message,
            context,
            env,
            hostname,
            namespace,
            origin,
            binary,
            user,
        } => {
            let record = LogRecord {
                level: LevelCode::from(level),
                category: CategoryCode::from(category),
                message,
                context,
                env,
                hostname: hostname.unwrap_or_else(detect_hostname),
                namespace,
                origin,
                binary,
                user,
            };
            client.submit(record)?
        }
        Command::List { per_page, page } => client.list(per_page, page)?,
        Command::Get { id } => client.get_by_id(id)?,
        Command::Delete { id } => client.delete_by_id(id)?,
    };

    println!("{body}");
    Ok(())
}

fn detect_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_default()
}
