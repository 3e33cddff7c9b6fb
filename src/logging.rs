use crate::error::{GameError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "anthill=info";

/// Send all tracing output to `path`. The terminal belongs to the game
/// frame, so nothing is ever written to stdout or stderr.
pub fn init(path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            GameError::InvalidConfig(format!("log file {} has no file name", path.display()))
        })?;
    let log_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)
        .map_err(io::Error::other)?;

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| GameError::IoError(io::Error::other(e)))?;

    Ok(())
}
