use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the log file path
pub const LOG_FILE_ENV: &str = "ENTRECAMADAS_LOG_FILE";

/// Install a file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr. Level comes from `RUST_LOG` (default `info`).
pub fn init_tracing(default_path: &Path) -> io::Result<PathBuf> {
    let log_path = std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_path.to_path_buf());

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(log_path)
}
