//! Configuration management for omdbtui
//!
//! Handles config file loading and API key resolution.
//! Config is stored at ~/.config/omdbtui/config.toml

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::omdb::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::api::OmdbConfig;
use crate::models::PlotLength;

/// Bundled OMDb API key, used when nothing else is configured
const BUNDLED_API_KEY: &str = "7fe741f0";

/// Environment variable overriding the API key
pub const API_KEY_ENV: &str = "OMDB_API_KEY";
/// Environment variable overriding the endpoint base URL
pub const BASE_URL_ENV: &str = "OMDB_BASE_URL";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// OMDb API key
    pub api_key: Option<String>,
    /// OMDb endpoint base URL
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Plot length for detail lookups
    pub plot: Option<PlotLength>,
    /// Log filter directive (e.g. "info", "omdbtui=debug")
    pub log_level: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/omdbtui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("omdbtui").join("config.toml"))
    }

    /// Load config from the default path, or return default if missing or unreadable
    pub fn load() -> Self {
        Self::path()
            .filter(|p| p.exists())
            .and_then(|p| Self::load_from(&p).ok())
            .unwrap_or_default()
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load from `path` if given, else from the default location.
    /// An explicit path must exist and parse.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::load()),
        }
    }

    /// Get OMDb API key with fallback chain:
    /// 1. Environment variable OMDB_API_KEY
    /// 2. Key from config file
    /// 3. Bundled key
    pub fn api_key(&self) -> String {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .unwrap_or_else(|| BUNDLED_API_KEY.to_string())
    }

    /// Endpoint base URL: OMDB_BASE_URL, then config file, then the public endpoint
    pub fn base_url(&self) -> String {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|u| !u.trim().is_empty())
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn plot(&self) -> PlotLength {
        self.plot.unwrap_or_default()
    }

    /// Connection settings for the OMDb client
    pub fn omdb(&self) -> OmdbConfig {
        OmdbConfig::new(self.base_url(), self.api_key()).with_timeout(self.timeout())
    }
}
