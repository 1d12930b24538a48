//! Configuration management for the termfolio site.
//!
//! This module provides TOML-based configuration file loading and saving.
//! The default configuration path is `~/.config/termfolio/config.toml`.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vfs::{Metadata, Permissions};

/// Configuration validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("bind must be an IP:port socket address, got {0}")]
    InvalidBind(String),

    #[error("log_level must be one of: trace, debug, info, warn, error; got {0}")]
    InvalidLogLevel(String),

    #[error("tree.{0} must not be empty")]
    EmptyOwnership(&'static str),

    #[error("prompt.{0} must not be empty")]
    EmptyPrompt(&'static str),
}

/// Valid log level values for tracing configuration.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Default listen address for `termfolio serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Main configuration structure for the termfolio site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,

    /// Shell prompt shown before every transcript.
    pub prompt: PromptConfig,

    /// Placeholder metadata for the nodes of the tree.
    pub tree: TreeConfig,

    /// Files served for static nodes.
    pub assets: AssetsConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
}

/// Prompt identity, rendered as `user@host:/path $`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PromptConfig {
    pub user: String,
    pub host: String,
}

/// Metadata every node of the tree is built with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TreeConfig {
    /// Owner user name.
    pub owner: String,

    /// Owner group name.
    pub group: String,

    /// Permission text, e.g. `rw-r--r--`.
    pub mode: Permissions,

    /// Hard-link count.
    pub links: u64,

    /// Size column.
    pub size: u64,

    /// Fixed modification time (RFC 3339). Unset means process start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// Static download settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the files behind static nodes, laid out like the
    /// tree (`key.asc` is served from `<dir>/key.asc`). Unset disables
    /// downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    pub level: String,

    /// Directory for daily rolling log files. Unset logs to stderr only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: "www".to_string(),
            host: "joaquinrossi.net".to_string(),
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        let placeholder = Metadata::placeholder(Utc::now());
        Self {
            owner: placeholder.user,
            group: placeholder.group,
            mode: placeholder.perms,
            links: placeholder.links,
            size: placeholder.size,
            modified: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

impl TreeConfig {
    /// Node metadata described by this section, stamped with `now` unless
    /// a fixed modification time is configured.
    pub fn metadata(&self, now: DateTime<Utc>) -> Metadata {
        Metadata {
            perms: self.mode,
            links: self.links,
            user: self.owner.clone(),
            group: self.group.clone(),
            size: self.size,
            modified: self.modified.unwrap_or(now),
        }
    }
}

/// Returns the default configuration file path.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termfolio")
        .join("config.toml")
}

impl Config {
    /// Apply environment variable overrides to the configuration.
    ///
    /// Environment variables take precedence over config file values.
    /// Supported variables:
    /// - TERMFOLIO_BIND: Override the listen address
    /// - TERMFOLIO_LOG_LEVEL: Override log level (trace, debug, info, warn, error)
    /// - TERMFOLIO_ASSETS_DIR: Override the static assets directory
    pub fn apply_env_overrides(&mut self) {
        if let Ok(bind) = std::env::var("TERMFOLIO_BIND") {
            if !bind.is_empty() {
                tracing::info!("Overriding bind from environment: {}", bind);
                self.server.bind = bind;
            }
        }

        if let Ok(level) = std::env::var("TERMFOLIO_LOG_LEVEL") {
            if !level.is_empty() {
                tracing::info!("Overriding log_level from environment: {}", level);
                self.logging.level = level;
            }
        }

        if let Ok(dir) = std::env::var("TERMFOLIO_ASSETS_DIR") {
            if !dir.is_empty() {
                tracing::info!("Overriding assets dir from environment: {}", dir);
                self.assets.dir = Some(PathBuf::from(dir));
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidBind(self.server.bind.clone()));
        }

        let level = self.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }

        if self.tree.owner.is_empty() {
            return Err(ConfigError::EmptyOwnership("owner"));
        }
        if self.tree.group.is_empty() {
            return Err(ConfigError::EmptyOwnership("group"));
        }

        if self.prompt.user.is_empty() {
            return Err(ConfigError::EmptyPrompt("user"));
        }
        if self.prompt.host.is_empty() {
            return Err(ConfigError::EmptyPrompt("host"));
        }

        Ok(())
    }

    /// Load configuration from a file.
    ///
    /// If the file does not exist, returns the default configuration.
    /// If the file exists but is invalid TOML, returns an error with
    /// a helpful message.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self> {
        Self::load(default_config_path())
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| anyhow::anyhow!("Invalid TOML configuration: {}", format_toml_error(&e)))
    }

    /// Save configuration to a file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = self.to_toml()?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }
}

/// Format a TOML deserialization error for user-friendly display.
fn format_toml_error(error: &toml::de::Error) -> String {
    let mut msg = error.message().to_string();

    if let Some(span) = error.span() {
        msg.push_str(&format!(" (at position {}..{})", span.start, span.end));
    }

    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert_eq!(config.prompt.user, "www");
        assert_eq!(config.tree.owner, "www");
        assert_eq!(config.tree.group, "www");
        assert_eq!(config.tree.mode.to_string(), "rw-r--r--");
        assert_eq!(config.tree.links, 1);
        assert_eq!(config.tree.size, 1);
        assert!(config.tree.modified.is_none());
        assert!(config.assets.dir.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_empty() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_toml_partial() {
        let toml = r#"
[prompt]
host = "example.org"

[tree]
mode = "rwxr-x---"
"#;
        let config = Config::from_toml(toml).unwrap();

        assert_eq!(config.prompt.host, "example.org");
        assert_eq!(config.prompt.user, "www");
        assert_eq!(config.tree.mode.to_string(), "rwxr-x---");
        assert_eq!(config.server.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_from_toml_full() {
        let toml = r#"
[server]
bind = "0.0.0.0:80"

[prompt]
user = "guest"
host = "box"

[tree]
owner = "root"
group = "wheel"
mode = "rwsr-xr-t"
links = 3
size = 4096
modified = "2024-02-29T10:00:00Z"

[assets]
dir = "/srv/termfolio"

[logging]
level = "debug"
dir = "/var/log/termfolio"
"#;
        let config = Config::from_toml(toml).unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:80");
        assert_eq!(config.prompt.user, "guest");
        assert_eq!(config.prompt.host, "box");
        assert_eq!(config.tree.owner, "root");
        assert_eq!(config.tree.group, "wheel");
        assert_eq!(config.tree.mode.to_string(), "rwsr-xr-t");
        assert_eq!(config.tree.links, 3);
        assert_eq!(config.tree.size, 4096);
        assert_eq!(
            config.tree.modified,
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 10, 0, 0).unwrap())
        );
        assert_eq!(config.assets.dir, Some(PathBuf::from("/srv/termfolio")));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.dir, Some(PathBuf::from("/var/log/termfolio")));
    }

    #[test]
    fn test_from_toml_invalid_mode() {
        let toml = r#"
[tree]
mode = "rwxrwxrwz"
"#;
        let err = Config::from_toml(toml).unwrap_err().to_string();
        assert!(err.contains("Invalid TOML"));
        assert!(err.contains("invalid permission string"));
    }

    #[test]
    fn test_from_toml_invalid_syntax() {
        let result = Config::from_toml("[server\nbind = \"x\"");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_roundtrip_custom() {
        let mut original = Config::default();
        original.prompt.host = "example.org".to_string();
        original.tree.mode = "rwx------".parse().unwrap();
        original.tree.modified = Some(Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
        original.assets.dir = Some(PathBuf::from("/srv/assets"));

        let toml = original.to_toml().unwrap();
        assert!(toml.contains("mode = \"rwx------\""));
        let loaded = Config::from_toml(&toml).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_tree_metadata() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut tree = TreeConfig::default();
        tree.owner = "alice".to_string();

        let meta = tree.metadata(now);
        assert_eq!(meta.user, "alice");
        assert_eq!(meta.modified, now);

        let fixed = Utc.with_ymd_and_hms(2020, 5, 5, 5, 5, 5).unwrap();
        tree.modified = Some(fixed);
        assert_eq!(tree.metadata(now).modified, fixed);
    }

    #[test]
    fn test_validate_bind() {
        let mut config = Config::default();
        config.server.bind = "localhost".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBind("localhost".to_string()))
        );

        config.server.bind = "[::1]:8080".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = Config::default();
        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "verbose".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel("verbose".to_string()))
        );
    }

    #[test]
    fn test_validate_empty_names() {
        let mut config = Config::default();
        config.tree.group = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyOwnership("group")));

        let mut config = Config::default();
        config.prompt.host = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPrompt("host")));
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::load("/nonexistent/path/config.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut original = Config::default();
        original.logging.level = "debug".to_string();
        original.server.bind = "127.0.0.1:9000".to_string();

        original.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "invalid [ toml").unwrap();

        let err = Config::load(&config_path).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.to_string_lossy().contains("termfolio"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var("TERMFOLIO_BIND", "0.0.0.0:3000");
        std::env::set_var("TERMFOLIO_LOG_LEVEL", "trace");
        std::env::set_var("TERMFOLIO_ASSETS_DIR", "/tmp/assets");

        let mut config = Config::default();
        config.apply_env_overrides();

        std::env::remove_var("TERMFOLIO_BIND");
        std::env::remove_var("TERMFOLIO_LOG_LEVEL");
        std::env::remove_var("TERMFOLIO_ASSETS_DIR");

        assert_eq!(config.server.bind, "0.0.0.0:3000");
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.assets.dir, Some(PathBuf::from("/tmp/assets")));
    }

    #[test]
    #[serial]
    fn test_env_overrides_ignore_empty() {
        std::env::set_var("TERMFOLIO_BIND", "");

        let mut config = Config::default();
        config.apply_env_overrides();

        std::env::remove_var("TERMFOLIO_BIND");

        assert_eq!(config.server.bind, DEFAULT_BIND);
    }
}
