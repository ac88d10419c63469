//! Page aggregate and its index summary.
//!
//! # Responsibility
//! - Define the full persisted page record and the denormalized summary kept
//!   in the listing index.
//! - Generate and validate page identifiers.
//!
//! # Invariants
//! - `id` never changes after creation.
//! - `id` matches `[A-Za-z0-9_-]+` and is never the reserved legacy suffix
//!   `data` (the single-page key shares the page key prefix).
//! - `created_at <= last_modified` once a page has been saved.

use super::person::Person;
use super::relative::{find_duplicate_id, Relative};
use super::timeline::Timeline;
use super::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Page identifier, embedded verbatim in storage keys.
pub type PageId = String;

/// Placeholder name given to freshly created pages.
pub const NEW_PAGE_NAME: &str = "New memorial page";

const RESERVED_PAGE_IDS: &[&str] = &["data"];
const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

static PAGE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid page id regex"));

/// Full memorial page record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub person: Person,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub relatives: Vec<Relative>,
    /// Epoch milliseconds; stamped on first save when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Epoch milliseconds; restamped on every save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,
}

/// Index entry projected from a [`Page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub id: PageId,
    #[serde(default, deserialize_with = "super::nullable_text")]
    pub name: String,
    #[serde(default, deserialize_with = "super::nullable_text")]
    pub years: String,
    #[serde(default, deserialize_with = "super::optional_text")]
    pub photo: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub last_modified: i64,
}

/// Defaults a new page is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSeed {
    pub person: Person,
    pub timeline: Timeline,
    pub relatives: Vec<Relative>,
}

impl Default for PageSeed {
    fn default() -> Self {
        Self {
            person: Person::named(NEW_PAGE_NAME),
            timeline: Timeline::default(),
            relatives: Vec::new(),
        }
    }
}

impl Page {
    /// Builds an unsaved page; timestamps are stamped by the first save.
    pub fn from_seed(id: impl Into<PageId>, seed: PageSeed) -> Self {
        Self {
            id: id.into(),
            person: seed.person,
            timeline: seed.timeline,
            relatives: seed.relatives,
            created_at: None,
            last_modified: None,
        }
    }

    /// Checks identity and relative-id uniqueness before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_page_id(&self.id)?;
        if let Some(id) = find_duplicate_id(&self.relatives) {
            return Err(ValidationError::DuplicateRelativeId(id.to_string()));
        }
        Ok(())
    }

    /// Projects the index entry. Unset timestamps fall back to `now_ms`.
    pub fn summary(&self, now_ms: i64) -> PageSummary {
        PageSummary {
            id: self.id.clone(),
            name: self.person.name.clone(),
            years: self.person.years.clone(),
            photo: self.person.photo.clone(),
            created_at: self.created_at.unwrap_or(now_ms),
            last_modified: self.last_modified.unwrap_or(now_ms),
        }
    }

    /// Stamps save timestamps.
    ///
    /// `last_modified` never moves backwards even if the wall clock does.
    pub fn touch(&mut self, now_ms: i64) {
        let previous = self.last_modified.unwrap_or(i64::MIN);
        let stamped = now_ms.max(previous);
        self.created_at.get_or_insert(stamped);
        self.last_modified = Some(stamped);
    }
}

/// Rejects ids that cannot be embedded in a storage key.
pub fn validate_page_id(id: &str) -> Result<(), ValidationError> {
    if !PAGE_ID_RE.is_match(id) || RESERVED_PAGE_IDS.contains(&id) {
        return Err(ValidationError::InvalidPageId(id.to_string()));
    }
    Ok(())
}

/// Generates `page_<epoch ms>_<9 base36 chars>`.
///
/// The random suffix carries ~46 bits from a v4 UUID, so ids created within
/// the same millisecond still differ.
pub fn generate_page_id(now_ms: i64) -> PageId {
    let mut entropy = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        suffix.push(char::from(BASE36[(entropy % 36) as usize]));
        entropy /= 36;
    }
    format!("page_{now_ms}_{suffix}")
}
