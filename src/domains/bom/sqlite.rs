//! SQLite implementation of [`PartStore`] on top of an `sqlx` pool.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info, instrument};

use super::counter;
use super::error::{BomError, BomResult};
use super::part::{NewPart, Part, PartId};
use super::store::PartStore;
use crate::core::config::StoreConfig;

/// Upper bound of ids bound into a single `IN (...)` clause.
const MAX_BIND_CHUNK: usize = 500;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS parts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) <= 255),
    number TEXT NOT NULL CHECK (length(number) <= 255),
    parent_id INTEGER NULL REFERENCES parts(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_parts_parent ON parts(parent_id);
"#;

/// Part store backed by a SQLite database.
#[derive(Debug, Clone)]
pub struct SqlitePartStore {
    pool: SqlitePool,
}

impl SqlitePartStore {
    /// Connect to the configured database and create the schema if needed.
    pub async fn connect(config: &StoreConfig) -> BomResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .connect_with(options)
            .await?;

        info!("Connected to part store at {}", config.database_url);
        Self::from_pool(pool).await
    }

    /// A private in-memory database, mostly useful for tests and demos.
    ///
    /// The pool is pinned to one connection that never expires, since every
    /// SQLite connection to `:memory:` opens a separate database.
    pub async fn in_memory() -> BomResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and run the schema migration.
    pub async fn from_pool(pool: SqlitePool) -> BomResult<Self> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        debug!("Part schema ready");
        Ok(Self { pool })
    }

    /// The underlying pool, shared with other tables of the same database.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PartStore for SqlitePartStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PartId) -> BomResult<Option<Part>> {
        let part = sqlx::query_as::<_, Part>(
            "SELECT id, name, number, parent_id FROM parts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(part)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> BomResult<Vec<Part>> {
        let parts = sqlx::query_as::<_, Part>(
            "SELECT id, name, number, parent_id FROM parts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(parts)
    }

    #[instrument(skip_all, fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[PartId]) -> BomResult<HashMap<PartId, Option<Part>>> {
        let mut found: HashMap<PartId, Option<Part>> = ids.iter().map(|id| (*id, None)).collect();
        let distinct: Vec<PartId> = found.keys().copied().collect();

        for chunk in distinct.chunks(MAX_BIND_CHUNK) {
            let mut query = QueryBuilder::<Sqlite>::new(
                "SELECT id, name, number, parent_id FROM parts WHERE id IN (",
            );
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            for part in query.build_query_as::<Part>().fetch_all(&self.pool).await? {
                found.insert(part.id, Some(part));
            }
        }

        Ok(found)
    }

    #[instrument(skip_all, fields(parents = parent_ids.len()))]
    async fn find_children(&self, parent_ids: &[PartId]) -> BomResult<Vec<Part>> {
        let mut children = Vec::new();

        for chunk in parent_ids.chunks(MAX_BIND_CHUNK) {
            let mut query = QueryBuilder::<Sqlite>::new(
                "SELECT id, name, number, parent_id FROM parts WHERE parent_id IN (",
            );
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(") ORDER BY id");

            children.extend(query.build_query_as::<Part>().fetch_all(&self.pool).await?);
        }

        // Chunks are each sorted; restore a global order across chunk boundaries.
        if parent_ids.len() > MAX_BIND_CHUNK {
            children.sort_by_key(|p| p.id);
        }

        Ok(children)
    }

    #[instrument(skip(self, part), fields(name = %part.name, number = %part.number))]
    async fn insert(&self, parent_id: Option<PartId>, part: &NewPart) -> BomResult<PartId> {
        part.validate()?;

        let mut tx = self.pool.begin().await?;

        if let Some(parent_id) = parent_id {
            let exists = sqlx::query_scalar::<_, i64>("SELECT 1 FROM parts WHERE id = ?")
                .bind(parent_id)
                .fetch_optional(&mut *tx)
                .await?;
            if exists.is_none() {
                return Err(BomError::not_found(parent_id));
            }
        }

        let id = sqlx::query("INSERT INTO parts (name, number, parent_id) VALUES (?, ?, ?)")
            .bind(&part.name)
            .bind(&part.number)
            .bind(parent_id)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        tx.commit().await?;

        debug!("Inserted part {} under {:?}", id, parent_id);
        Ok(id)
    }

    #[instrument(skip(self, part))]
    async fn update(&self, id: PartId, part: &NewPart) -> BomResult<()> {
        part.validate()?;

        let affected = sqlx::query("UPDATE parts SET name = ?, number = ? WHERE id = ?")
            .bind(&part.name)
            .bind(&part.number)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(BomError::not_found(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PartId) -> BomResult<bool> {
        let affected = sqlx::query("DELETE FROM parts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    #[instrument(skip(self))]
    async fn count_descendants(&self, id: PartId) -> BomResult<u64> {
        counter::count_recursive(&self.pool, id).await
    }
}
