//! Configuration management for the bookstore server

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Plain-text bodies returned for request-level failures
#[derive(Debug, Deserialize, Clone)]
pub struct MessagesConfig {
    pub method_not_allowed: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub messages: MessagesConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // BOOKSTORE_SERVER__PORT=9090 -> server.port
            .add_source(
                Environment::with_prefix("BOOKSTORE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Builder seeded with the built-in defaults, before any file or environment layer
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let server = ServerConfig::default();
        let logging = LoggingConfig::default();
        let messages = MessagesConfig::default();

        Config::builder()
            .set_default("server.host", server.host)?
            .set_default("server.port", i64::from(server.port))?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)?
            .set_default("messages.method_not_allowed", messages.method_not_allowed)
    }

    /// Socket address string the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            method_not_allowed: "Методът не е позволен".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = AppConfig::defaults()
            .and_then(|builder| builder.build())
            .and_then(|config| config.try_deserialize())
            .expect("defaults should deserialize");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.messages.method_not_allowed, "Методът не е позволен");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_override_layer_wins() {
        let config: AppConfig = AppConfig::defaults()
            .and_then(|builder| builder.set_override("server.port", 9090_i64))
            .and_then(|builder| builder.set_override("messages.method_not_allowed", "Nope"))
            .and_then(|builder| builder.build())
            .and_then(|config| config.try_deserialize())
            .expect("overrides should deserialize");

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.messages.method_not_allowed, "Nope");
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
