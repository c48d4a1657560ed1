use super::config::LogLevel;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the configured level
/// applies crate-wide with the HTTP stack quieted to `warn`. Safe to call
/// more than once; later calls are no-ops.
pub fn init(level: LogLevel) {
    let tracing_level: tracing::Level = level.into();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("notilog={tracing_level},hyper=warn,reqwest=warn"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
