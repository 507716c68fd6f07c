//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so interactive sessions log to
//! `~/.local/share/omdbtui/omdbtui.log`. CLI runs log to stderr.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Log file used in TUI mode
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("omdbtui").join("omdbtui.log"))
}

impl LogTarget {
    /// Level used when neither RUST_LOG nor the config sets one
    fn default_level(&self) -> &'static str {
        match self {
            LogTarget::Stderr => "warn",
            LogTarget::File => "info",
        }
    }
}

fn filter(config: &Config, target: LogTarget) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config
            .log_level
            .as_deref()
            .unwrap_or_else(|| target.default_level());
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(target.default_level()))
    })
}

/// Install the global subscriber. Best effort: failures leave logging off,
/// and only the first call takes effect.
pub fn init_tracing(config: &Config, target: LogTarget) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config, target))
        .with_target(false)
        .with_ansi(false);

    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File => {
            let Some(path) = log_file_path() else {
                return;
            };
            if let Some(parent) = path.parent() {
                if std::fs::create_dir_all(parent).is_err() {
                    return;
                }
            }
            let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
                return;
            };
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        assert_eq!(LogTarget::Stderr.default_level(), "warn");
        assert_eq!(LogTarget::File.default_level(), "info");
    }

    #[test]
    fn test_log_file_under_app_dir() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("omdbtui/omdbtui.log"));
        }
    }
}
