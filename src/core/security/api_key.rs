//! API key authentication: the key table and the gate that checks request headers.

use sqlx::SqlitePool;
use tracing::{debug, info, instrument, warn};

use crate::core::config::AuthConfig;

/// Header carrying the caller's key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS api_keys (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    key TEXT NOT NULL UNIQUE CHECK (length(key) <= 255)
);
"#;

/// Reasons a request is turned away by the gate.
///
/// The messages are sent back to the client verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("API Key is missing")]
    Missing,

    #[error("API Key is empty")]
    Empty,

    #[error("Invalid API Key")]
    Invalid,

    #[error("API key store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Persistent set of accepted API keys.
#[derive(Debug, Clone)]
pub struct ApiKeyStore {
    pool: SqlitePool,
}

impl ApiKeyStore {
    /// Wrap `pool` and create the key table if needed.
    pub async fn new(pool: SqlitePool) -> Result<Self, AuthError> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Whether `key` is a registered key.
    #[instrument(skip_all)]
    pub async fn is_valid(&self, key: &str) -> Result<bool, AuthError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM api_keys WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    /// Register `key` and return its id. Registering a known key returns the existing id.
    #[instrument(skip_all)]
    pub async fn add_key(&self, key: &str) -> Result<i64, AuthError> {
        if key.trim().is_empty() {
            return Err(AuthError::Empty);
        }

        sqlx::query("INSERT OR IGNORE INTO api_keys (key) VALUES (?)")
            .bind(key)
            .execute(&self.pool)
            .await?;

        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM api_keys WHERE key = ?")
            .bind(key)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }
}

/// Decides whether a request may reach the BOM domain.
#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    store: ApiKeyStore,
    required: bool,
}

impl ApiKeyGate {
    /// Build the gate and seed the keys listed in `config`.
    pub async fn new(pool: SqlitePool, config: &AuthConfig) -> Result<Self, AuthError> {
        let store = ApiKeyStore::new(pool).await?;
        for key in &config.api_keys {
            store.add_key(key).await?;
        }

        if config.require_api_key {
            info!("API key gate enabled ({} seeded key(s))", config.api_keys.len());
            if config.api_keys.is_empty() {
                warn!("API key gate enabled but MCP_API_KEYS is empty");
            }
        }

        Ok(Self {
            store,
            required: config.require_api_key,
        })
    }

    /// Whether the gate rejects unauthenticated requests.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn store(&self) -> &ApiKeyStore {
        &self.store
    }

    /// Check the header values a request presented.
    ///
    /// Exactly one non-empty, registered value is accepted.
    pub async fn authorize(&self, presented: &[&str]) -> Result<(), AuthError> {
        if !self.required {
            return Ok(());
        }

        let key = match presented {
            [] => return Err(AuthError::Missing),
            [key] => *key,
            _ => return Err(AuthError::Invalid),
        };

        if key.is_empty() {
            return Err(AuthError::Empty);
        }

        if !self.store.is_valid(key).await? {
            warn!("Rejected request with unknown API key");
            return Err(AuthError::Invalid);
        }

        debug!("API key accepted");
        Ok(())
    }
}
