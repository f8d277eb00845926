// src/repositories/key_value_repository.rs

use std::sync::Arc;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::{get_connection, ConnectionPool};
use crate::error::AppResult;

/// A durable string-to-string slot store.
/// Writes replace the whole value of a key.
pub trait KeyValueRepository: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

pub struct SqliteKeyValueRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;

        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, initialize_database};

    fn repository() -> SqliteKeyValueRepository {
        let pool = create_memory_pool().unwrap();
        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();
        }
        SqliteKeyValueRepository::new(Arc::new(pool))
    }

    #[test]
    fn test_missing_key_is_none() {
        let repo = repository();
        assert_eq!(repo.get("@filmes").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_whole_value() {
        let repo = repository();
        repo.set("@filmes", r#"[{"id":"1","title":"Up","watched":false}]"#)
            .unwrap();
        repo.set("@filmes", "[]").unwrap();

        assert_eq!(repo.get("@filmes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_keys_are_independent() {
        let repo = repository();
        repo.set("a", "1").unwrap();
        repo.set("b", "2").unwrap();
        assert_eq!(repo.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(repo.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let pool = create_memory_pool().unwrap();
        let repo = SqliteKeyValueRepository::new(Arc::new(pool));
        assert!(repo.get("@filmes").is_err());
        assert!(repo.set("@filmes", "[]").is_err());
    }
}
