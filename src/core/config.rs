//! Configuration management for the BOM MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally through a `.env` file) on top of defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Part store (database) configuration.
    pub store: StoreConfig,

    /// Limits applied when loading subtrees.
    pub tree: TreeConfig,

    /// API key authentication configuration.
    pub auth: AuthConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Part store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// sqlx SQLite connection URL.
    pub database_url: String,

    /// Upper bound of pooled connections.
    pub max_connections: u32,
}

/// Materialization guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Deepest level loaded below a root.
    pub max_depth: usize,

    /// Largest subtree (in parts, root included) loaded at once.
    pub max_nodes: usize,
}

/// API key gate configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Reject HTTP requests without a known `X-API-KEY`.
    pub require_api_key: bool,

    /// Keys seeded into the key table at startup.
    pub api_keys: Vec<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("require_api_key", &self.require_api_key)
            .field(
                "api_keys",
                &format_args!("[{} key(s) REDACTED]", self.api_keys.len()),
            )
            .finish()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:bom.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_nodes: 100_000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "bom-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            store: StoreConfig::default(),
            tree: TreeConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

/// Parse `key` from the environment, keeping `current` when unset or invalid.
fn env_parse<T: FromStr>(key: &str, current: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring invalid value '{}' for {}", raw, key);
                current
            }
        },
        Err(_) => current,
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` (after `.env`), defaulting to `info`.
    ///
    /// Available before the rest of [`Config`] so the subscriber is installed
    /// ahead of the warnings `Config::from_env` may emit.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            level: std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_DATABASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MCP_DATABASE_URL") {
            config.store.database_url = url;
        }
        config.store.max_connections =
            env_parse("MCP_DATABASE_MAX_CONNECTIONS", config.store.max_connections);

        config.tree.max_depth = env_parse("MCP_TREE_MAX_DEPTH", config.tree.max_depth);
        config.tree.max_nodes = env_parse("MCP_TREE_MAX_NODES", config.tree.max_nodes);

        if let Ok(keys) = std::env::var("MCP_API_KEYS") {
            config.auth.api_keys = keys
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect();
            info!("{} API key(s) loaded from environment", config.auth.api_keys.len());
        }

        config.auth.require_api_key =
            env_parse("MCP_REQUIRE_API_KEY", config.auth.require_api_key);
        if !config.auth.require_api_key {
            warn!("MCP_REQUIRE_API_KEY not enabled - HTTP requests are not authenticated");
        }

        config
    }

    /// Reject settings the store or the materializer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.store.max_connections == 0 {
            return Err(Error::config("MCP_DATABASE_MAX_CONNECTIONS must be at least 1"));
        }
        if self.tree.max_nodes == 0 {
            return Err(Error::config("MCP_TREE_MAX_NODES must be at least 1"));
        }
        if self.store.database_url.trim().is_empty() {
            return Err(Error::config("MCP_DATABASE_URL must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_store_and_tree_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DATABASE_URL", "sqlite::memory:");
            std::env::set_var("MCP_TREE_MAX_DEPTH", "8");
            std::env::set_var("MCP_TREE_MAX_NODES", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.store.database_url, "sqlite::memory:");
        assert_eq!(config.tree.max_depth, 8);
        assert_eq!(config.tree.max_nodes, TreeConfig::default().max_nodes);
        unsafe {
            std::env::remove_var("MCP_DATABASE_URL");
            std::env::remove_var("MCP_TREE_MAX_DEPTH");
            std::env::remove_var("MCP_TREE_MAX_NODES");
        }
    }

    #[test]
    fn test_api_keys_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_API_KEYS", " alpha, ,beta ");
            std::env::set_var("MCP_REQUIRE_API_KEY", "true");
        }
        let config = Config::from_env();
        assert_eq!(config.auth.api_keys, vec!["alpha", "beta"]);
        assert!(config.auth.require_api_key);
        unsafe {
            std::env::remove_var("MCP_API_KEYS");
            std::env::remove_var("MCP_REQUIRE_API_KEY");
        }
    }

    #[test]
    fn test_logging_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        assert_eq!(LoggingConfig::from_env().level, "debug");
        assert_eq!(Config::from_env().logging.level, "debug");
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        assert_eq!(LoggingConfig::from_env().level, "info");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.store.database_url, "sqlite:bom.db?mode=rwc");
        assert_eq!(config.tree.max_depth, 64);
        assert!(!config.auth.require_api_key);
        assert!(config.auth.api_keys.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.store.max_connections = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_api_keys_redacted_in_debug() {
        let auth = AuthConfig {
            require_api_key: true,
            api_keys: vec!["super_secret_key".to_string()],
        };
        let debug_str = format!("{:?}", auth);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
