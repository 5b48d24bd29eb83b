//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Stats backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint is derived from
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// What the leaders chart does when its request fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Keep showing the placeholder leaderboard; the failure is only logged
    #[default]
    Placeholder,
    /// Report the failure in the view state
    Surface,
}

/// Dashboard view settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Number of leaders requested for the chart
    #[serde(default = "default_top_limit")]
    pub top_limit: u32,

    #[serde(default)]
    pub fallback: FallbackPolicy,
}

fn default_top_limit() -> u32 {
    10
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_limit: default_top_limit(),
            fallback: FallbackPolicy::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("courtside").join("config.toml")),
            Some(PathBuf::from("./courtside.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // API overrides
        if let Ok(url) = std::env::var("COURTSIDE_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("COURTSIDE_REQUEST_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        // Dashboard overrides
        if let Ok(limit) = std::env::var("COURTSIDE_TOP_LIMIT") {
            if let Ok(n) = limit.parse() {
                self.dashboard.top_limit = n;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("COURTSIDE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("COURTSIDE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Courtside Configuration
#
# Environment variables override these settings:
# - COURTSIDE_API_URL
# - COURTSIDE_REQUEST_TIMEOUT
# - COURTSIDE_TOP_LIMIT
# - COURTSIDE_LOG_LEVEL
# - COURTSIDE_LOG_FORMAT

[api]
# Stats backend base URL (all endpoints are derived from it)
base_url = "http://localhost:8080"

# Request timeout in seconds
request_timeout_secs = 30

[dashboard]
# Number of players on the fantasy leaders chart
top_limit = 10

# On chart fetch failure: "placeholder" (show sample leaders) or "surface" (show the error)
fallback = "placeholder"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"

# Optional log file path (logs go to stderr otherwise)
# file = "/tmp/courtside.log"
"#
    .to_string()
}
