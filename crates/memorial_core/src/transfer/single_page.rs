//! Pasted-JSON exchange for the single-page document.

use super::TransferError;
use crate::repo::legacy_repo::LegacyDocument;
use crate::repo::RepoError;
use serde_json::Value;

/// Download file name for a single-page export.
pub const SINGLE_PAGE_EXPORT_FILE_NAME: &str = "memorial-page-export.json";

/// Pretty-printed JSON of the document.
pub fn export_single_page(document: &LegacyDocument) -> Result<String, TransferError> {
    serde_json::to_string_pretty(document)
        .map_err(|err| TransferError::Repo(RepoError::Serialization(err)))
}

/// Parses pasted JSON into a document.
///
/// Requires `person.name`; a missing or non-array `relatives` becomes empty.
pub fn parse_single_page(json: &str) -> Result<LegacyDocument, TransferError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(TransferError::EmptyInput);
    }
    let value: Value = serde_json::from_str(trimmed).map_err(TransferError::Parse)?;

    let has_name = value
        .get("person")
        .and_then(|person| person.get("name"))
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    if !has_name {
        return Err(TransferError::InvalidDocument(
            "`person.name` is required".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|err| TransferError::InvalidDocument(format!("unreadable document: {err}")))
}

#[cfg(test)]
mod tests {
    use super::parse_single_page;
    use crate::transfer::TransferError;

    #[test]
    fn missing_relatives_become_empty() {
        let document = parse_single_page(r#"{"person":{"name":"Ann"},"relatives":"x"}"#).unwrap();
        assert_eq!(document.person.name, "Ann");
        assert!(document.relatives.is_empty());
    }

    #[test]
    fn blank_and_nameless_input_is_rejected() {
        assert!(matches!(parse_single_page("  "), Err(TransferError::EmptyInput)));
        assert!(matches!(
            parse_single_page(r#"{"person":{"name":" "}}"#),
            Err(TransferError::InvalidDocument(_))
        ));
        assert!(matches!(parse_single_page("{"), Err(TransferError::Parse(_))));
    }
}
