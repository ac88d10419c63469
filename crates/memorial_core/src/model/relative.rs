//! Relatives shown in the family tree.
//!
//! # Invariants
//! - `relation` decides the family-tree row; nothing else links relatives.
//! - Ids are unique within the owning page; generated ids never collide with
//!   existing ones.

use super::validation::ValidationError;
use super::{non_blank, nullable_text, optional_text};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of family link between a relative and the page subject.
///
/// Stored as lowercase English words. Records written by earlier
/// Russian-language versions of the editor are read through the aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    #[serde(alias = "мать")]
    Mother,
    #[serde(alias = "отец")]
    Father,
    #[serde(alias = "партнёр", alias = "партнер")]
    Partner,
    #[serde(alias = "сын")]
    Son,
    #[serde(alias = "дочь")]
    Daughter,
    #[serde(alias = "брат")]
    Brother,
    #[serde(alias = "сестра")]
    Sister,
    #[serde(alias = "внук")]
    Grandson,
    #[serde(alias = "внучка")]
    Granddaughter,
    #[serde(alias = "другое")]
    Other,
}

impl Relation {
    pub const ALL: [Relation; 10] = [
        Self::Mother,
        Self::Father,
        Self::Partner,
        Self::Son,
        Self::Daughter,
        Self::Brother,
        Self::Sister,
        Self::Grandson,
        Self::Granddaughter,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mother => "mother",
            Self::Father => "father",
            Self::Partner => "partner",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::Brother => "brother",
            Self::Sister => "sister",
            Self::Grandson => "grandson",
            Self::Granddaughter => "granddaughter",
            Self::Other => "other",
        }
    }

    fn from_legacy(value: &str) -> Option<Self> {
        match value {
            "мать" => Some(Self::Mother),
            "отец" => Some(Self::Father),
            "партнёр" | "партнер" => Some(Self::Partner),
            "сын" => Some(Self::Son),
            "дочь" => Some(Self::Daughter),
            "брат" => Some(Self::Brother),
            "сестра" => Some(Self::Sister),
            "внук" => Some(Self::Grandson),
            "внучка" => Some(Self::Granddaughter),
            "другое" => Some(Self::Other),
            _ => None,
        }
    }
}

impl FromStr for Relation {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::MissingRelation);
        }
        Self::ALL
            .into_iter()
            .find(|relation| relation.as_str() == normalized)
            .or_else(|| Self::from_legacy(&normalized))
            .ok_or_else(|| ValidationError::UnknownRelation(value.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relative {
    pub id: String,
    pub name: String,
    pub relation: Relation,
    #[serde(default, deserialize_with = "nullable_text")]
    pub years: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "nullable_text")]
    pub note: String,
}

/// Relative form input. `id = None` adds a new relative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelativeDraft {
    pub id: Option<String>,
    pub name: String,
    /// Raw relation value from the form select.
    pub relation: String,
    pub years: String,
    pub photo: String,
    pub note: String,
}

/// Adds or replaces a relative from form input; returns the relative id.
///
/// Validation runs before `relatives` is touched. New relatives are appended,
/// updated ones keep their position.
pub fn upsert_relative(
    relatives: &mut Vec<Relative>,
    draft: &RelativeDraft,
    now_ms: i64,
) -> Result<String, ValidationError> {
    let name = non_blank(&draft.name).ok_or(ValidationError::BlankRelativeName)?;
    let relation: Relation = draft.relation.parse()?;
    let existing_id = draft.id.as_deref().and_then(non_blank);

    let position = match existing_id.as_deref() {
        Some(id) => Some(
            relatives
                .iter()
                .position(|relative| relative.id == id)
                .ok_or_else(|| ValidationError::RelativeNotFound(id.to_string()))?,
        ),
        None => None,
    };

    let id = existing_id.unwrap_or_else(|| next_relative_id(relatives, now_ms));
    let relative = Relative {
        id: id.clone(),
        name,
        relation,
        years: draft.years.trim().to_string(),
        photo: non_blank(&draft.photo),
        note: draft.note.trim().to_string(),
    };

    match position {
        Some(index) => relatives[index] = relative,
        None => relatives.push(relative),
    }
    Ok(id)
}

/// Removes a relative by id. Returns whether anything was removed.
pub fn remove_relative(relatives: &mut Vec<Relative>, id: &str) -> bool {
    let before = relatives.len();
    relatives.retain(|relative| relative.id != id);
    relatives.len() != before
}

/// Returns the first duplicated relative id, if any.
pub fn find_duplicate_id(relatives: &[Relative]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    relatives
        .iter()
        .map(|relative| relative.id.as_str())
        .find(|id| !seen.insert(*id))
}

fn next_relative_id(relatives: &[Relative], now_ms: i64) -> String {
    let base = format!("rel-{now_ms}");
    let taken = |candidate: &str| relatives.iter().any(|relative| relative.id == candidate);
    if !taken(&base) {
        return base;
    }
    let mut suffix = 2;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{remove_relative, upsert_relative, Relation, Relative, RelativeDraft};
    use crate::model::validation::ValidationError;

    fn draft(name: &str, relation: &str) -> RelativeDraft {
        RelativeDraft {
            name: name.to_string(),
            relation: relation.to_string(),
            ..RelativeDraft::default()
        }
    }

    #[test]
    fn relation_parses_english_and_legacy_values() {
        assert_eq!(" Mother ".parse::<Relation>(), Ok(Relation::Mother));
        assert_eq!("внучка".parse::<Relation>(), Ok(Relation::Granddaughter));
        assert_eq!("".parse::<Relation>(), Err(ValidationError::MissingRelation));
        assert!(matches!(
            "cousin".parse::<Relation>(),
            Err(ValidationError::UnknownRelation(_))
        ));
    }

    #[test]
    fn legacy_relation_deserializes_through_alias() {
        let relative: Relative =
            serde_json::from_str(r#"{"id":"rel_1","name":"P","relation":"партнёр","photo":null}"#)
                .unwrap();
        assert_eq!(relative.relation, Relation::Partner);
        assert_eq!(relative.years, "");
        assert_eq!(relative.photo, None);
    }

    #[test]
    fn generated_ids_do_not_collide_within_same_millisecond() {
        let mut relatives = Vec::new();
        let first = upsert_relative(&mut relatives, &draft("A", "son"), 42).unwrap();
        let second = upsert_relative(&mut relatives, &draft("B", "son"), 42).unwrap();
        assert_eq!(first, "rel-42");
        assert_eq!(second, "rel-42-2");
    }

    #[test]
    fn update_keeps_position_and_unknown_id_is_rejected() {
        let mut relatives = Vec::new();
        let a = upsert_relative(&mut relatives, &draft("A", "son"), 1).unwrap();
        upsert_relative(&mut relatives, &draft("B", "daughter"), 2).unwrap();

        let mut edit = draft("A renamed", "brother");
        edit.id = Some(a.clone());
        upsert_relative(&mut relatives, &edit, 3).unwrap();
        assert_eq!(relatives[0].name, "A renamed");
        assert_eq!(relatives[0].relation, Relation::Brother);

        edit.id = Some("missing".to_string());
        let err = upsert_relative(&mut relatives, &edit, 4).unwrap_err();
        assert_eq!(err, ValidationError::RelativeNotFound("missing".to_string()));
        assert_eq!(relatives.len(), 2);

        assert!(remove_relative(&mut relatives, &a));
        assert!(!remove_relative(&mut relatives, &a));
    }

    #[test]
    fn blank_name_is_rejected_before_mutation() {
        let mut relatives = Vec::new();
        let err = upsert_relative(&mut relatives, &draft("  ", "son"), 1).unwrap_err();
        assert_eq!(err, ValidationError::BlankRelativeName);
        assert!(relatives.is_empty());
    }
}
