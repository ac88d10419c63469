//! Validation errors raised before any record is mutated or persisted.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The person name is blank after trim.
    BlankName,
    /// A relative name is blank after trim.
    BlankRelativeName,
    /// No relation was selected for a relative.
    MissingRelation,
    /// The relation value is not one of the known kinds.
    UnknownRelation(String),
    /// Page id is empty or contains characters unsafe for a storage key.
    InvalidPageId(String),
    /// Two relatives in one page share an id.
    DuplicateRelativeId(String),
    /// An update targeted a relative that does not exist.
    RelativeNotFound(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name is required"),
            Self::BlankRelativeName => write!(f, "relative name is required"),
            Self::MissingRelation => write!(f, "relation is required"),
            Self::UnknownRelation(value) => write!(f, "unknown relation `{value}`"),
            Self::InvalidPageId(value) => write!(f, "invalid page id `{value}`"),
            Self::DuplicateRelativeId(value) => write!(f, "duplicate relative id `{value}`"),
            Self::RelativeNotFound(value) => write!(f, "relative not found: {value}"),
        }
    }
}

impl Error for ValidationError {}
