//! Record stores over the key-value storage seam.
//!
//! # Responsibility
//! - Keep the page index and the full page records in step.
//! - Read and write the single-page legacy document.
//!
//! # Invariants
//! - Malformed stored records read as "not found", never as fatal errors.
//! - Storage and serialization failures are returned to the caller.

pub mod legacy_repo;
pub mod page_repo;

use crate::model::validation::ValidationError;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for page and legacy-document persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Storage(StorageError),
    Serialization(serde_json::Error),
    /// A stored value other than a page record cannot be decoded.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to serialize record: {err}"),
            Self::InvalidData(message) => write!(f, "invalid stored data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}
