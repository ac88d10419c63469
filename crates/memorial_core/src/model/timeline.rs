//! Life timeline: birth plus three insertion-ordered sections.

use super::nullable_text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Birth {
    #[serde(deserialize_with = "nullable_text")]
    pub date: String,
    #[serde(deserialize_with = "nullable_text")]
    pub place: String,
}

impl Birth {
    pub fn is_blank(&self) -> bool {
        self.date.is_empty() && self.place.is_empty()
    }

    pub(crate) fn trimmed(&self) -> Self {
        Self {
            date: self.date.trim().to_string(),
            place: self.place.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "nullable_text")]
    pub years: String,
    #[serde(deserialize_with = "nullable_text")]
    pub institution: String,
    #[serde(deserialize_with = "nullable_text")]
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerEntry {
    #[serde(deserialize_with = "nullable_text")]
    pub years: String,
    #[serde(deserialize_with = "nullable_text")]
    pub position: String,
    #[serde(deserialize_with = "nullable_text")]
    pub company: String,
    #[serde(
        deserialize_with = "nullable_text",
        skip_serializing_if = "String::is_empty"
    )]
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyEntry {
    #[serde(deserialize_with = "nullable_text")]
    pub years: String,
    #[serde(deserialize_with = "nullable_text")]
    pub members: String,
    #[serde(deserialize_with = "nullable_text")]
    pub note: String,
}

/// A form-editable timeline list item.
pub trait TimelineEntry: Clone {
    fn is_blank(&self) -> bool;
    fn trimmed(&self) -> Self;
}

impl TimelineEntry for EducationEntry {
    fn is_blank(&self) -> bool {
        self.years.is_empty() && self.institution.is_empty() && self.details.is_empty()
    }

    fn trimmed(&self) -> Self {
        Self {
            years: self.years.trim().to_string(),
            institution: self.institution.trim().to_string(),
            details: self.details.trim().to_string(),
        }
    }
}

impl TimelineEntry for CareerEntry {
    fn is_blank(&self) -> bool {
        self.years.is_empty()
            && self.position.is_empty()
            && self.company.is_empty()
            && self.details.is_empty()
    }

    fn trimmed(&self) -> Self {
        Self {
            years: self.years.trim().to_string(),
            position: self.position.trim().to_string(),
            company: self.company.trim().to_string(),
            details: self.details.trim().to_string(),
        }
    }
}

impl TimelineEntry for FamilyEntry {
    fn is_blank(&self) -> bool {
        self.years.is_empty() && self.members.is_empty() && self.note.is_empty()
    }

    fn trimmed(&self) -> Self {
        Self {
            years: self.years.trim().to_string(),
            members: self.members.trim().to_string(),
            note: self.note.trim().to_string(),
        }
    }
}

/// Trims every entry and drops the ones left entirely blank.
///
/// Order of the remaining entries is preserved.
pub fn clean_entries<T: TimelineEntry>(entries: &[T]) -> Vec<T> {
    entries
        .iter()
        .map(TimelineEntry::trimmed)
        .filter(|entry| !entry.is_blank())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeline {
    pub birth: Birth,
    pub education: Vec<EducationEntry>,
    pub career: Vec<CareerEntry>,
    pub family: Vec<FamilyEntry>,
}

/// Replacement for one timeline section, as submitted by an edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineEdit {
    Birth(Birth),
    Education(Vec<EducationEntry>),
    Career(Vec<CareerEntry>),
    Family(Vec<FamilyEntry>),
}

impl Timeline {
    /// Replaces one section wholesale with trimmed, non-blank input.
    pub fn apply(&mut self, edit: &TimelineEdit) {
        match edit {
            TimelineEdit::Birth(birth) => self.birth = birth.trimmed(),
            TimelineEdit::Education(items) => self.education = clean_entries(items),
            TimelineEdit::Career(items) => self.career = clean_entries(items),
            TimelineEdit::Family(items) => self.family = clean_entries(items),
        }
    }
}
