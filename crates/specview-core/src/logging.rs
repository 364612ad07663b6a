//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "SPECVIEW_LOG";

const LOG_FILE_NAME: &str = "specview.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/specview/logs/` (the platform's
/// local data directory). The terminal is owned by the UI, so nothing is
/// ever logged to stdout or stderr.
///
/// Log level is controlled by the `SPECVIEW_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SPECVIEW_LOG=debug specview
/// SPECVIEW_LOG=specview_app=trace specview
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, warn for everything else
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("specview=info,specview_core=info,specview_app=info,specview_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("specview starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("specview").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_specview_logs() {
        let path = get_log_directory().unwrap();
        assert!(path.ends_with("specview/logs"));
    }
}
