//! The subject of a memorial page.

use super::{nullable_text, optional_text};
use serde::{Deserialize, Serialize};

/// Conventional id of the page subject.
pub const SUBJECT_ID: &str = "main";

/// Short answers shown under the biography.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleSummary {
    /// Who the person was.
    #[serde(deserialize_with = "nullable_text")]
    pub role: String,
    /// What the person loved.
    #[serde(deserialize_with = "nullable_text")]
    pub loved: String,
    /// What matters most to remember.
    #[serde(deserialize_with = "nullable_text")]
    pub key_memory: String,
}

impl RoleSummary {
    pub fn is_empty(&self) -> bool {
        self.role.is_empty() && self.loved.is_empty() && self.key_memory.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    #[serde(deserialize_with = "nullable_text")]
    pub id: String,
    #[serde(deserialize_with = "nullable_text")]
    pub name: String,
    /// Free-text life span, e.g. `1945–2023`.
    #[serde(deserialize_with = "nullable_text")]
    pub years: String,
    #[serde(deserialize_with = "nullable_text")]
    pub quote: String,
    #[serde(deserialize_with = "nullable_text")]
    pub bio: String,
    #[serde(deserialize_with = "nullable_text")]
    pub location: String,
    pub role_summary: RoleSummary,
    /// URL or data URI.
    #[serde(deserialize_with = "optional_text")]
    pub photo: Option<String>,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            id: SUBJECT_ID.to_string(),
            name: String::new(),
            years: String::new(),
            quote: String::new(),
            bio: String::new(),
            location: String::new(),
            role_summary: RoleSummary::default(),
            photo: None,
        }
    }
}

impl Person {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
