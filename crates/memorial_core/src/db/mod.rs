//! SQLite bootstrap for the persistent key-value store.
//!
//! # Responsibility
//! - Open file or in-memory connections ready for [`crate::SqliteKvStore`].
//! - Bring the `kv_entries` schema up to date before any key is touched.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Failures surface as [`StorageError`], the same type the store reports,
//!   so callers handle one error for "open" and "read/write".

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub use crate::storage::{StorageError, StorageResult};
