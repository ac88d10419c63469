//! Whole-store backup documents: `{ "pages": [...], "fullData": { id: page } }`.

use super::TransferError;
use crate::model::page::{validate_page_id, Page, PageSummary};
use crate::repo::page_repo::PageRepository;
use crate::repo::RepoResult;
use crate::storage::KvStore;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Serialized backup of the indexed store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub pages: Vec<PageSummary>,
    pub full_data: BTreeMap<String, Page>,
}

/// Collects the index and every resolvable record.
///
/// Index entries whose record cannot be loaded are left out of both halves,
/// so the document always imports cleanly.
pub fn export_all<S: KvStore>(repo: &PageRepository<S>) -> RepoResult<ExportDocument> {
    let mut pages = Vec::new();
    let mut full_data = BTreeMap::new();
    for summary in repo.list_summaries()? {
        match repo.get_page(&summary.id)? {
            Some(page) => {
                full_data.insert(summary.id.clone(), page);
                pages.push(summary);
            }
            None => warn!(
                "event=store_export module=transfer status=skip page_id={} reason=record_unavailable",
                summary.id
            ),
        }
    }
    info!(
        "event=store_export module=transfer status=ok page_count={}",
        pages.len()
    );
    Ok(ExportDocument { pages, full_data })
}

/// Pretty-printed JSON of [`export_all`].
pub fn export_json<S: KvStore>(repo: &PageRepository<S>) -> RepoResult<String> {
    let document = export_all(repo)?;
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Download file name for a backup taken at `now_ms`.
pub fn export_file_name(now_ms: i64) -> String {
    format!("memorial_pages_backup_{now_ms}.json")
}

/// Replaces the whole store with the pages in `json`.
///
/// The document is validated completely before anything is written, then
/// applied as one batch. Returns the number of imported pages.
///
/// # Errors
/// - `EmptyInput` for blank text, `Parse` for malformed JSON.
/// - `InvalidDocument` when `pages` is not an array, `fullData` is not an
///   object, an entry does not decode, an id is unsafe or duplicated, or the
///   two halves do not cover the same ids.
/// - `Repo` when the write fails; the store is left unchanged.
pub fn import_all<S: KvStore>(
    repo: &mut PageRepository<S>,
    json: &str,
) -> Result<usize, TransferError> {
    let document = match validate_document(json) {
        Ok(document) => document,
        Err(err) => {
            warn!("event=store_import module=transfer status=rejected error={err}");
            return Err(err);
        }
    };

    let pages: Vec<Page> = document
        .pages
        .iter()
        .filter_map(|summary| document.full_data.get(&summary.id).cloned())
        .collect();
    if let Err(err) = repo.replace_all(&document.pages, &pages) {
        error!("event=store_import module=transfer status=error error={err}");
        return Err(err.into());
    }

    info!(
        "event=store_import module=transfer status=ok page_count={}",
        document.pages.len()
    );
    Ok(document.pages.len())
}

fn validate_document(json: &str) -> Result<ExportDocument, TransferError> {
    if json.trim().is_empty() {
        return Err(TransferError::EmptyInput);
    }
    let value: Value = serde_json::from_str(json).map_err(TransferError::Parse)?;
    let Value::Object(mut root) = value else {
        return Err(invalid("document must be a JSON object"));
    };

    let Some(Value::Array(raw_pages)) = root.remove("pages") else {
        return Err(invalid("`pages` must be an array"));
    };
    let Some(Value::Object(raw_full_data)) = root.remove("fullData") else {
        return Err(invalid("`fullData` must be an object"));
    };

    let mut pages = Vec::with_capacity(raw_pages.len());
    let mut seen = HashSet::new();
    for (position, raw) in raw_pages.into_iter().enumerate() {
        let summary: PageSummary = serde_json::from_value(raw)
            .map_err(|err| invalid(format!("`pages[{position}]` is not a page summary: {err}")))?;
        validate_page_id(&summary.id)
            .map_err(|err| invalid(format!("`pages[{position}]`: {err}")))?;
        if !seen.insert(summary.id.clone()) {
            return Err(invalid(format!("duplicate page id `{}`", summary.id)));
        }
        pages.push(summary);
    }

    let mut full_data = BTreeMap::new();
    for (key, raw) in raw_full_data {
        let page: Page = serde_json::from_value(raw)
            .map_err(|err| invalid(format!("`fullData.{key}` is not a page: {err}")))?;
        if page.id != key {
            return Err(invalid(format!(
                "`fullData.{key}` holds page id `{}`",
                page.id
            )));
        }
        page.validate().map_err(|err| invalid(format!("`fullData.{key}`: {err}")))?;
        if !seen.contains(&key) {
            return Err(invalid(format!("`fullData.{key}` has no entry in `pages`")));
        }
        full_data.insert(key, page);
    }

    if let Some(missing) = pages
        .iter()
        .find(|summary| !full_data.contains_key(&summary.id))
    {
        return Err(invalid(format!(
            "page `{}` has no entry in `fullData`",
            missing.id
        )));
    }

    Ok(ExportDocument { pages, full_data })
}

fn invalid(message: impl Into<String>) -> TransferError {
    TransferError::InvalidDocument(message.into())
}
