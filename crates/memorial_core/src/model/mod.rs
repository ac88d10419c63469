//! Memorial page domain model.
//!
//! # Responsibility
//! - Define the persisted record shapes (page, person, timeline, relatives)
//!   and the lightweight index summary.
//! - Keep JSON field naming compatible with the stored layout (camelCase).
//!
//! # Invariants
//! - A page id is immutable after creation and safe to embed in a storage key.
//! - Relative ids are unique within one page.
//! - Timeline lists keep insertion order; nothing here sorts by date.

pub mod family_tree;
pub mod page;
pub mod person;
pub mod relative;
pub mod timeline;
pub mod validation;

use serde::{Deserialize, Deserializer};

/// Reads a string that may be stored as `null`.
pub(crate) fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads an optional URL-like value; blank strings are treated as absent.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|value| !value.trim().is_empty()))
}

/// Trims form input; returns `None` for blank values.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
