//! File logging via `tracing`
//!
//! The terminal is owned by the UI, so nothing is ever logged to stdout or
//! stderr. Records go to a daily-rolling file under the platform data dir:
//!
//! ```bash
//! SHELLKIT_LOG=debug shellkit
//! tail -f ~/.local/share/shellkit/logs/shellkit.log.$(date +%F)
//! ```

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "SHELLKIT_LOG";

const DEFAULT_DIRECTIVE: &str = "shellkit=info,warn";
const FILE_PREFIX: &str = "shellkit.log";

pub fn init() -> Result<()> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let writer = RollingFileAppender::new(Rotation::DAILY, &dir, FILE_PREFIX);
    let timer = fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_owned());

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_timer(timer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), dir = %dir.display(), "shellkit logging started");
    Ok(())
}

/// `SHELLKIT_LOG` if it parses, the default directive otherwise
fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// `<data_local_dir>/shellkit/logs`, or `./shellkit/logs` on platforms
/// without one
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shellkit")
        .join("logs")
}
