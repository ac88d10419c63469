//! Page list controller.
//!
//! # Responsibility
//! - Load the index (seeding demo content into an empty store when asked).
//! - Search, create pages, and import/export the whole collection.
//!
//! # Invariants
//! - The cached summaries are reloaded after every write.
//! - A corrupt index is rebuilt from the full records instead of failing.

use crate::clock::now_epoch_ms;
use crate::demo::demo_page;
use crate::model::page::{PageId, PageSeed, PageSummary};
use crate::render::list::render_pages_grid;
use crate::render::{Region, RegionUpdate};
use crate::repo::page_repo::PageRepository;
use crate::repo::{RepoError, RepoResult};
use crate::search::filter::{filter_pages, normalize_query, SearchOutcome};
use crate::storage::KvStore;
use crate::transfer::{export_json, import_all, TransferError};
use log::{info, warn};

/// Controller state of the list view.
pub struct ListService<S: KvStore> {
    repo: PageRepository<S>,
    pages: Vec<PageSummary>,
    query: String,
}

impl<S: KvStore> ListService<S> {
    /// Opens the list view.
    ///
    /// With `seed_demo_when_empty`, an empty collection first receives the
    /// demo page.
    pub fn open(repo: PageRepository<S>, seed_demo_when_empty: bool) -> RepoResult<Self> {
        let mut service = Self {
            repo,
            pages: Vec::new(),
            query: String::new(),
        };
        service.reload()?;

        if service.pages.is_empty() && seed_demo_when_empty {
            let mut page = demo_page(now_epoch_ms());
            service.repo.save_page(&mut page)?;
            info!(
                "event=demo_seed module=service status=ok page_id={}",
                page.id
            );
            service.reload()?;
        }
        Ok(service)
    }

    pub fn pages(&self) -> &[PageSummary] {
        &self.pages
    }

    /// Normalized active query; empty when not searching.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn outcome(&self) -> SearchOutcome {
        filter_pages(&self.pages, &self.query)
    }

    pub fn search(&mut self, raw_query: &str) -> RegionUpdate {
        self.query = normalize_query(raw_query);
        self.render_grid()
    }

    pub fn clear_search(&mut self) -> RegionUpdate {
        self.query.clear();
        self.render_grid()
    }

    pub fn render_grid(&self) -> RegionUpdate {
        RegionUpdate::new(Region::PagesGrid, render_pages_grid(&self.outcome()))
    }

    /// Creates a page with default content; returns the id to navigate to.
    pub fn create_page(&mut self) -> RepoResult<PageId> {
        let id = self.repo.create_page(PageSeed::default())?;
        self.reload()?;
        Ok(id)
    }

    /// Backup document of the whole collection.
    pub fn export_json(&self) -> RepoResult<String> {
        export_json(&self.repo)
    }

    /// Replaces the collection from a backup document and re-renders.
    pub fn import_json(&mut self, json: &str) -> Result<(usize, RegionUpdate), TransferError> {
        let count = import_all(&mut self.repo, json)?;
        self.reload()?;
        Ok((count, self.render_grid()))
    }

    pub fn repository(&self) -> &PageRepository<S> {
        &self.repo
    }

    pub fn into_repository(self) -> PageRepository<S> {
        self.repo
    }

    fn reload(&mut self) -> RepoResult<()> {
        self.pages = match self.repo.list_summaries() {
            Ok(pages) => pages,
            Err(RepoError::InvalidData(message)) => {
                warn!("event=index_load module=service status=recover reason={message}");
                self.repo.rebuild_index()?
            }
            Err(err) => return Err(err),
        };
        Ok(())
    }
}
