//! SQLite-backed key-value store over the `kv_entries` table.
//!
//! # Invariants
//! - Batches run inside one `IMMEDIATE` transaction.
//! - The connection must come from `db::open_db*` (migrations applied).

use super::{KvStore, KvWrite, StorageResult};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

/// Persistent key-value store borrowing a migrated connection.
pub struct SqliteKvStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn keys_with_prefix(&self, prefix: &str) -> StorageResult<Vec<String>> {
        // substr comparison keeps `_` and `%` in prefixes literal.
        let mut stmt = self.conn.prepare(
            "SELECT key
             FROM kv_entries
             WHERE substr(key, 1, length(?1)) = ?1
             ORDER BY key ASC;",
        )?;
        let mut rows = stmt.query([prefix])?;
        let mut keys = Vec::new();
        while let Some(row) = rows.next()? {
            keys.push(row.get(0)?);
        }
        Ok(keys)
    }

    fn apply(&mut self, batch: &[KvWrite]) -> StorageResult<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        for write in batch {
            match write {
                KvWrite::Set { key, value } => {
                    tx.execute(
                        "INSERT INTO kv_entries (key, value, updated_at)
                         VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
                         ON CONFLICT(key) DO UPDATE SET
                            value = excluded.value,
                            updated_at = excluded.updated_at;",
                        params![key, value],
                    )?;
                }
                KvWrite::Remove { key } => {
                    tx.execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }
}
