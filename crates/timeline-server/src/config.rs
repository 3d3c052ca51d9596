//! Configuration loading for the timeline server.
//!
//! The configuration lives in `timeline-config.yaml` in the working
//! directory. Every key is optional; a missing file means all defaults.
//! Environment variables are applied on top by
//! [`SiteConfig::apply_env_overrides`].

use std::path::Path;

use serde::Deserialize;
use timeline_chat::{BACKEND_ENV_VAR, ChatConfig};
use timeline_web::ServerConfig;

/// Environment variable overriding `server.host`.
pub const HOST_ENV_VAR: &str = "TIMELINE_HOST";

/// Environment variable overriding `server.port`.
pub const PORT_ENV_VAR: &str = "TIMELINE_PORT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override has an unusable value.
    #[error("invalid environment override {name}: {message}")]
    Env {
        /// The variable name.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level site configuration. Mirrors `timeline-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Listen address.
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat gateway settings.
    #[serde(default)]
    pub chat: ChatConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SiteConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if it is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// - `TIMELINE_HOST` overrides `server.host`
    /// - `TIMELINE_PORT` overrides `server.port`
    /// - `GEMINI_API_KEY` sets the chat credential
    /// - `TIMELINE_CHAT_BACKEND` overrides `chat.backend`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if the port is not a valid port number or
    /// the backend name is unknown.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV_VAR).filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_owned();
        }
        if let Some(port) = lookup(PORT_ENV_VAR) {
            self.server.port = port.trim().parse::<u16>().map_err(|e| ConfigError::Env {
                name: PORT_ENV_VAR,
                message: format!("{port:?} is not a port number: {e}"),
            })?;
        }
        self.chat
            .apply_env_overrides(&lookup)
            .map_err(|e| ConfigError::Env {
                name: BACKEND_ENV_VAR,
                message: e.user_message(),
            })
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error) when
    /// `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use timeline_chat::BackendType;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = SiteConfig::parse("").unwrap_or_default();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.chat.backend, BackendType::Gemini);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 3000
chat:
  backend: offline
  model: "gemini-1.5-pro"
  system_preamble: "Trả lời ngắn gọn."
logging:
  level: debug
  format: json
"#;
        let config = SiteConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.chat.backend, BackendType::Offline);
        assert_eq!(config.chat.model, "gemini-1.5-pro");
        assert_eq!(config.chat.system_preamble.as_deref(), Some("Trả lời ngắn gọn."));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = SiteConfig::parse("server:\n  port: 9000\n").unwrap_or_default();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.chat.model, "gemini-2.0-flash");
    }

    #[test]
    fn credential_is_never_read_from_yaml() {
        let config = SiteConfig::parse("chat:\n  api_key: \"from-yaml\"\n").unwrap_or_default();
        assert!(config.chat.api_key.is_none());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = SiteConfig::parse("server: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = SiteConfig::default();
        let result = config.apply_env_overrides(lookup_from(&[
            (HOST_ENV_VAR, "127.0.0.1"),
            (PORT_ENV_VAR, "4000"),
            ("GEMINI_API_KEY", "k"),
            (BACKEND_ENV_VAR, "offline"),
        ]));
        assert!(result.is_ok());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert!(config.chat.has_credential());
        assert_eq!(config.chat.backend, BackendType::Offline);
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut config = SiteConfig::default();
        let result = config.apply_env_overrides(lookup_from(&[(PORT_ENV_VAR, "99999")]));
        assert!(matches!(result, Err(ConfigError::Env { name: PORT_ENV_VAR, .. })));
    }

    #[test]
    fn bad_backend_override_is_rejected() {
        let mut config = SiteConfig::default();
        let result =
            config.apply_env_overrides(lookup_from(&[(BACKEND_ENV_VAR, "openai")]));
        assert!(matches!(result, Err(ConfigError::Env { name: BACKEND_ENV_VAR, .. })));
    }
}
