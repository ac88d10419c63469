//! Indexed page store.
//!
//! # Responsibility
//! - CRUD for [`Page`] records plus the denormalized listing index.
//! - Whole-store replacement for imports.
//!
//! # Invariants
//! - The set of indexed ids equals the set of stored full records.
//! - Record and index are written in one atomic batch, record first.
//! - Index order is insertion order; replacing an entry keeps its position.
//!
//! # Storage layout
//! - `memorial_pages_list`: JSON array of [`PageSummary`].
//! - `memorial_page_<id>`: JSON [`Page`].

use super::legacy_repo::LEGACY_KEY;
use super::{RepoError, RepoResult};
use crate::clock::now_epoch_ms;
use crate::model::page::{generate_page_id, validate_page_id, Page, PageId, PageSeed, PageSummary};
use crate::storage::{KvStore, KvWrite};
use log::{error, info, warn};

/// Key holding the listing index.
pub const INDEX_KEY: &str = "memorial_pages_list";
/// Prefix of every full page record key.
pub const PAGE_KEY_PREFIX: &str = "memorial_page_";

const MAX_ID_ATTEMPTS: usize = 16;

/// Storage key of a page's full record.
pub fn page_key(id: &str) -> String {
    format!("{PAGE_KEY_PREFIX}{id}")
}

/// Page record store generic over the key-value backend.
///
/// Pass `&mut store` to share one backend between several repositories or
/// controllers in sequence.
pub struct PageRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> PageRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Returns the index verbatim; empty when no index exists yet.
    ///
    /// # Errors
    /// - `InvalidData` when the index value is not a summary array.
    pub fn list_summaries(&self) -> RepoResult<Vec<PageSummary>> {
        let Some(raw) = self.store.get(INDEX_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|err| {
            error!("event=index_load module=repo status=error error_code=index_corrupt error={err}");
            RepoError::InvalidData(format!("`{INDEX_KEY}` is not a page summary list: {err}"))
        })
    }

    /// Loads one page. Absent or unparsable records yield `Ok(None)`.
    pub fn get_page(&self, id: &str) -> RepoResult<Option<Page>> {
        if validate_page_id(id).is_err() {
            return Ok(None);
        }
        let Some(raw) = self.store.get(&page_key(id))? else {
            return Ok(None);
        };

        match serde_json::from_str::<Page>(&raw) {
            Ok(page) if page.id == id => Ok(Some(page)),
            Ok(page) => {
                warn!(
                    "event=page_load module=repo status=error error_code=id_mismatch page_id={} stored_id={}",
                    id, page.id
                );
                Ok(None)
            }
            Err(err) => {
                warn!(
                    "event=page_load module=repo status=error error_code=record_corrupt page_id={id} error={err}"
                );
                Ok(None)
            }
        }
    }

    /// Persists a page and upserts its index entry.
    ///
    /// `page` is stamped (`last_modified`, and `created_at` when unset) even
    /// if the write then fails.
    pub fn save_page(&mut self, page: &mut Page) -> RepoResult<PageSummary> {
        page.validate()?;
        page.touch(now_epoch_ms());

        let summary = page.summary(now_epoch_ms());
        let mut index = self.list_summaries()?;
        match index.iter_mut().find(|entry| entry.id == summary.id) {
            Some(entry) => *entry = summary.clone(),
            None => index.push(summary.clone()),
        }

        let batch = [
            KvWrite::set(page_key(&page.id), serde_json::to_string(page)?),
            KvWrite::set(INDEX_KEY, serde_json::to_string(&index)?),
        ];
        if let Err(err) = self.store.apply(&batch) {
            error!(
                "event=page_save module=repo status=error page_id={} error={}",
                page.id, err
            );
            return Err(err.into());
        }

        info!(
            "event=page_save module=repo status=ok page_id={} index_len={}",
            page.id,
            index.len()
        );
        Ok(summary)
    }

    /// Removes a page from the index and drops its record.
    ///
    /// Idempotent: returns `false` when neither half existed.
    pub fn delete_page(&mut self, id: &str) -> RepoResult<bool> {
        let mut index = self.list_summaries()?;
        let indexed_before = index.len();
        index.retain(|entry| entry.id != id);
        let was_indexed = index.len() != indexed_before;

        let key = page_key(id);
        let had_record = validate_page_id(id).is_ok() && self.store.get(&key)?.is_some();
        if !was_indexed && !had_record {
            return Ok(false);
        }

        let mut batch = Vec::with_capacity(2);
        if had_record {
            batch.push(KvWrite::remove(key));
        }
        if was_indexed {
            batch.push(KvWrite::set(INDEX_KEY, serde_json::to_string(&index)?));
        }
        self.store.apply(&batch)?;

        info!("event=page_delete module=repo status=ok page_id={id}");
        Ok(true)
    }

    /// Creates and persists a page from seed defaults; returns its new id.
    pub fn create_page(&mut self, seed: PageSeed) -> RepoResult<PageId> {
        let id = self.fresh_page_id()?;
        let mut page = Page::from_seed(id.clone(), seed);
        self.save_page(&mut page)?;
        info!("event=page_create module=repo status=ok page_id={id}");
        Ok(id)
    }

    /// Ids of every stored full record, sorted.
    pub fn record_ids(&self) -> RepoResult<Vec<PageId>> {
        let legacy_suffix = &LEGACY_KEY[PAGE_KEY_PREFIX.len()..];
        Ok(self
            .store
            .keys_with_prefix(PAGE_KEY_PREFIX)?
            .into_iter()
            .map(|key| key[PAGE_KEY_PREFIX.len()..].to_string())
            .filter(|id| id != legacy_suffix)
            .collect())
    }

    /// Rebuilds the index from the stored full records.
    ///
    /// Used to recover from a corrupt index. Unreadable records are removed
    /// so both halves agree afterwards. Entries are ordered by `created_at`.
    pub fn rebuild_index(&mut self) -> RepoResult<Vec<PageSummary>> {
        let now = now_epoch_ms();
        let mut batch = Vec::new();
        let mut index = Vec::new();
        for id in self.record_ids()? {
            match self.get_page(&id)? {
                Some(page) => index.push(page.summary(now)),
                None => batch.push(KvWrite::remove(page_key(&id))),
            }
        }
        index.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        batch.push(KvWrite::set(INDEX_KEY, serde_json::to_string(&index)?));
        self.store.apply(&batch)?;

        warn!(
            "event=index_rebuild module=repo status=ok index_len={} dropped_records={}",
            index.len(),
            batch.len() - 1
        );
        Ok(index)
    }

    /// Replaces the whole store content in one batch.
    ///
    /// Callers must have validated that `pages` and `summaries` describe the
    /// same ids. Records of pages missing from `summaries` are removed.
    pub(crate) fn replace_all(
        &mut self,
        summaries: &[PageSummary],
        pages: &[Page],
    ) -> RepoResult<()> {
        let mut batch = Vec::with_capacity(pages.len() + 2);
        for stale in self.record_ids()? {
            if !summaries.iter().any(|summary| summary.id == stale) {
                batch.push(KvWrite::remove(page_key(&stale)));
            }
        }
        for page in pages {
            batch.push(KvWrite::set(page_key(&page.id), serde_json::to_string(page)?));
        }
        batch.push(KvWrite::set(INDEX_KEY, serde_json::to_string(summaries)?));
        self.store.apply(&batch)?;
        Ok(())
    }

    fn fresh_page_id(&self) -> RepoResult<PageId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = generate_page_id(now_epoch_ms());
            if self.store.get(&page_key(&candidate))?.is_none() {
                return Ok(candidate);
            }
        }
        Err(RepoError::InvalidData(
            "could not generate an unused page id".to_string(),
        ))
    }
}
