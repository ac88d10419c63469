//! Whole-store backups and single-page document exchange.
//!
//! # Responsibility
//! - Export every indexed page into one transferable JSON document.
//! - Import such a document atomically: validate everything, then write once.
//! - Exchange the single-page legacy document as pasted JSON.
//!
//! # Invariants
//! - A rejected import leaves the store byte-for-byte unchanged.

mod backup;
mod single_page;

pub use backup::{export_all, export_file_name, export_json, import_all, ExportDocument};
pub use single_page::{export_single_page, parse_single_page, SINGLE_PAGE_EXPORT_FILE_NAME};

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Import/export failure with a user-presentable message.
#[derive(Debug)]
pub enum TransferError {
    /// Nothing to import.
    EmptyInput,
    /// Text is not valid JSON.
    Parse(serde_json::Error),
    /// JSON is well-formed but does not have the expected shape.
    InvalidDocument(String),
    /// Persistence failed; nothing was applied.
    Repo(RepoError),
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no JSON data provided"),
            Self::Parse(err) => write!(f, "failed to parse JSON: {err}"),
            Self::InvalidDocument(message) => write!(f, "invalid data format: {message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::EmptyInput | Self::InvalidDocument(_) => None,
        }
    }
}

impl From<RepoError> for TransferError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
