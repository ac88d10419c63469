//! Core of the memorial pages editor.
//!
//! Pages about a remembered person are kept in a key-value store as an index
//! of summaries plus one full record per page. This crate owns the record
//! invariants, backups, family-tree grouping, HTML projections, and the view
//! controllers that tie them together.

pub mod clock;
pub mod config;
pub mod db;
pub mod demo;
pub mod logging;
pub mod model;
pub mod repo;
pub mod render;
pub mod search;
pub mod service;
pub mod storage;
pub mod transfer;

pub use config::{AppConfig, ConfigError};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::page::{Page, PageId, PageSeed, PageSummary};
pub use model::person::Person;
pub use model::relative::{Relation, Relative, RelativeDraft};
pub use model::validation::ValidationError;
pub use repo::legacy_repo::{LegacyDocument, LegacyPageStore};
pub use repo::page_repo::PageRepository;
pub use repo::{RepoError, RepoResult};
pub use service::hero_service::HeroService;
pub use service::list_service::ListService;
pub use service::profile_service::ProfileService;
pub use storage::{KvStore, MemoryKvStore, SqliteKvStore, StorageError};
pub use transfer::TransferError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
