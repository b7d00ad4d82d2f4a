//! File logging.
//!
//! The console carries the game text, so log lines go only to a
//! per-session file.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Installs the global subscriber writing to `{log_dir}/{session_id}/client.log`.
///
/// `RUST_LOG` refines the filter; the default level is `info`. The returned
/// guard must be held until exit or buffered lines are lost.
pub fn setup_logging(config: &ClientConfig) -> Result<WorkerGuard> {
    let session_log_dir = config.log_dir.join(&config.session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized: session={}", config.session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}
