//! Application configuration for the text analysis service.
//!
//! Settings live in a TOML file next to the process working directory
//! (`settings.toml` by default). CLI flags override config file values,
//! which override defaults. The config is constructed once at startup and
//! never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TasError};

/// Default settings file name, resolved against the working directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

// ---------------------------------------------------------------------------
// Config structs (matching settings.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Service identity, reflected by the information endpoint.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Keyword extraction settings.
    #[serde(default)]
    pub keywords: KeywordsConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "localhost".into()
}
fn default_port() -> u16 {
    8020
}

/// `[service]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name reported by `/service/information`.
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

fn default_service_name() -> String {
    "tas".into()
}

/// `[keywords]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Path to the stop-word list, one word per line.
    #[serde(default = "default_stop_list")]
    pub stop_list: String,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            stop_list: default_stop_list(),
        }
    }
}

fn default_stop_list() -> String {
    "data/SmartStoplist.txt".into()
}

/// `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the application config from disk. Returns defaults if the file
/// does not exist.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!(?path, "settings file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| TasError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| TasError::config(format!("failed to parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("stop_list"));
        assert!(toml_str.contains("8020"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.server.host, "localhost");
        assert_eq!(parsed.server.port, 8020);
        assert_eq!(parsed.service.name, "tas");
        assert_eq!(parsed.keywords.stop_list, "data/SmartStoplist.txt");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[server]
port = 8000

[keywords]
stop_list = "/etc/tas/stoplist.txt"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.keywords.stop_list, "/etc/tas/stoplist.txt");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_settings_file_uses_defaults() {
        let config =
            load_config(Path::new("/nonexistent/tas-settings.toml")).expect("defaults");
        assert_eq!(config.server.port, 8020);
    }
}
