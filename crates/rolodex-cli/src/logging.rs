//! tracing subscriber setup.
//!
//! `RUST_LOG` wins over `--log-level` when set. The interactive browser owns
//! the terminal, so it must never log to stderr.

use crate::types::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    /// Console commands log to stderr; the browser only logs to an explicit file.
    pub fn resolve(log_file: Option<PathBuf>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Discard,
            (None, false) => LogTarget::Stderr,
        }
    }
}

pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // A subscriber may already be installed when embedded in tests.
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target() {
        assert_eq!(LogTarget::resolve(None, false), LogTarget::Stderr);
        assert_eq!(LogTarget::resolve(None, true), LogTarget::Discard);
        assert_eq!(
            LogTarget::resolve(Some(PathBuf::from("/tmp/rolodex.log")), true),
            LogTarget::File(PathBuf::from("/tmp/rolodex.log"))
        );
    }
}
