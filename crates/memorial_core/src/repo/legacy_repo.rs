//! Single-page legacy document store.
//!
//! # Responsibility
//! - Read and write the one-person document kept under `memorial_page_data`.
//! - Fall back to demo content when the document is missing or unusable.
//! - Convert the legacy document into an indexed page on request.
//!
//! # Invariants
//! - The legacy key is never indexed and never touched by page CRUD.
//! - A stored document is usable only when it has a non-blank person name.
//! - Migration never deletes the legacy document.

use super::page_repo::PageRepository;
use super::RepoResult;
use crate::demo::demo_legacy_document;
use crate::model::page::{PageId, PageSeed};
use crate::model::person::Person;
use crate::model::relative::Relative;
use crate::model::timeline::Timeline;
use crate::storage::KvStore;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Key holding the single-page document.
pub const LEGACY_KEY: &str = "memorial_page_data";

/// Persisted single-page shape: one person and their relatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyDocument {
    pub person: Person,
    #[serde(default, deserialize_with = "relatives_or_empty")]
    pub relatives: Vec<Relative>,
}

impl LegacyDocument {
    /// A document is usable when the person has a name.
    pub fn is_usable(&self) -> bool {
        !self.person.name.trim().is_empty()
    }
}

/// Where the document returned by [`LegacyPageStore::load_or_seed`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Stored,
    Demo,
}

pub struct LegacyPageStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> LegacyPageStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Reads the stored document; `None` when absent, unparsable or unnamed.
    pub fn load(&self) -> RepoResult<Option<LegacyDocument>> {
        let Some(raw) = self.store.get(LEGACY_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<LegacyDocument>(&raw) {
            Ok(document) if document.is_usable() => Ok(Some(document)),
            Ok(_) => {
                warn!("event=legacy_load module=repo status=error error_code=missing_name");
                Ok(None)
            }
            Err(err) => {
                warn!(
                    "event=legacy_load module=repo status=error error_code=document_corrupt error={err}"
                );
                Ok(None)
            }
        }
    }

    /// Loads the stored document, or seeds and persists the demo document.
    pub fn load_or_seed(&mut self) -> RepoResult<(LegacyDocument, LoadOrigin)> {
        if let Some(document) = self.load()? {
            return Ok((document, LoadOrigin::Stored));
        }
        let document = demo_legacy_document();
        self.save(&document)?;
        info!("event=legacy_load module=repo status=ok origin=demo");
        Ok((document, LoadOrigin::Demo))
    }

    pub fn save(&mut self, document: &LegacyDocument) -> RepoResult<()> {
        let raw = serde_json::to_string(document)?;
        self.store.set(LEGACY_KEY, &raw)?;
        Ok(())
    }
}

/// Copies the legacy document into the indexed store as a new page.
///
/// Returns `None` when there is no usable legacy document. The legacy key is
/// left in place; running this twice creates two pages.
pub fn migrate_legacy_page<S: KvStore>(store: &mut S) -> RepoResult<Option<PageId>> {
    let Some(document) = LegacyPageStore::new(&mut *store).load()? else {
        return Ok(None);
    };

    let seed = PageSeed {
        person: document.person,
        timeline: Timeline::default(),
        relatives: document.relatives,
    };
    let id = PageRepository::new(&mut *store).create_page(seed)?;
    info!("event=legacy_migrate module=repo status=ok page_id={id}");
    Ok(Some(id))
}

fn relatives_or_empty<'de, D>(deserializer: D) -> Result<Vec<Relative>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => {
            serde_json::from_value(value).map_err(serde::de::Error::custom)
        }
        _ => Ok(Vec::new()),
    }
}
