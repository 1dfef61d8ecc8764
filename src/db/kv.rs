//! SQLite-backed [`Storage`]: one row per slot in `kv_store`.

use crate::core::storage::Storage;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Record a user action in the internal log.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}

impl Storage for SqliteStorage {
    fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let value: Option<String> = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.map(String::into_bytes))
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> AppResult<()> {
        let value = std::str::from_utf8(bytes)
            .map_err(|e| AppError::Storage(format!("payload for '{key}' is not UTF-8: {e}")))?;

        self.pool.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
