use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::error::ScopeError;

/// Log files past this size are moved aside before a run appends to them.
pub const MAX_LOG_BYTES: u64 = 1_000_000;

pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber: plain text to `log_path`, human output
/// on stderr. `RUST_LOG` overrides the verbosity flag.
pub fn init(verbose: u8, log_path: &Path) -> Result<(), ScopeError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    let sink = open_log(log_path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(sink)
                .with_ansi(false)
                .with_target(false),
        )
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| ScopeError::Config(format!("logging already initialised: {}", e)))
}

pub fn open_log(path: &Path) -> Result<File, ScopeError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    rotate_oversized(path)?;
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// `data/phishscope.log` -> `data/phishscope.log.1`
pub fn rotated_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".1");
    path.with_file_name(name)
}

fn rotate_oversized(path: &Path) -> Result<(), ScopeError> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_LOG_BYTES => {
            fs::rename(path, rotated_path(path))?;
            Ok(())
        }
        _ => Ok(()),
    }
}
