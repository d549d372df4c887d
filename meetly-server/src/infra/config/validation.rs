use thiserror::Error;

use super::models::Config;
use crate::infra::constants::DEFAULT_TOKEN_KEY;

/// Non-fatal configuration problem surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push_with_hint(&mut self, message: impl Into<String>, hint: impl Into<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error(
        "AUTH_TOKEN_KEY is unset or uses the built-in development key; set a unique secret or enable DEV_MODE"
    )]
    DefaultTokenKey,
    #[error("DATABASE_MAX_CONNECTIONS must be at least 1")]
    ZeroPoolSize,
}

pub fn apply_guard_rails(config: &Config) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.database.max_connections == 0 {
        return Err(ConfigGuardRailError::ZeroPoolSize);
    }

    if config.auth.token_key == DEFAULT_TOKEN_KEY {
        if !config.dev_mode {
            return Err(ConfigGuardRailError::DefaultTokenKey);
        }
        warnings.push_with_hint(
            "Using the development token key",
            "Set AUTH_TOKEN_KEY before exposing the server",
        );
    }

    if config.server.port == 0 && !config.dev_mode {
        warnings.push_with_hint(
            "SERVER_PORT is 0; the OS will pick an ephemeral port",
            "Set SERVER_PORT to a fixed port outside development",
        );
    }

    if config.cors.allowed_origins.is_empty() && !config.dev_mode {
        warnings.push_with_hint(
            "CORS allow-list is empty; browsers on any origin will be accepted",
            "Set CORS_ALLOWED_ORIGINS to the web client origins",
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::models::{
        AuthConfig, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig,
    };

    fn config(token_key: &str, dev_mode: bool) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:5173".into()],
            },
            auth: AuthConfig {
                token_key: token_key.into(),
            },
            dev_mode,
            metadata: ConfigMetadata::default(),
        }
    }

    #[test]
    fn default_token_key_is_fatal_outside_dev_mode() {
        assert_eq!(
            apply_guard_rails(&config(DEFAULT_TOKEN_KEY, false)).unwrap_err(),
            ConfigGuardRailError::DefaultTokenKey
        );
    }

    #[test]
    fn default_token_key_warns_in_dev_mode() {
        let warnings = apply_guard_rails(&config(DEFAULT_TOKEN_KEY, true)).unwrap();
        assert_eq!(warnings.items.len(), 1);
    }

    #[test]
    fn empty_cors_and_ephemeral_port_warn_in_production() {
        let mut cfg = config("prod-secret", false);
        cfg.server.port = 0;
        cfg.cors.allowed_origins.clear();

        let warnings = apply_guard_rails(&cfg).unwrap();
        assert_eq!(warnings.items.len(), 2);
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let mut cfg = config("prod-secret", false);
        cfg.database.max_connections = 0;
        assert_eq!(
            apply_guard_rails(&cfg).unwrap_err(),
            ConfigGuardRailError::ZeroPoolSize
        );
    }
}
