//! Name substring filter over page summaries.
//!
//! # Invariants
//! - Matching is case-insensitive on the trimmed query.
//! - A blank query returns every summary in index order.
//! - Result order is index order; nothing is re-ranked.

use crate::model::page::PageSummary;

/// Result of filtering the page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The collection is empty and no query is active.
    NoPages,
    /// Pages exist but none matched `query`.
    NoMatches { query: String },
    /// Matching summaries in index order.
    Matches(Vec<PageSummary>),
}

impl SearchOutcome {
    pub fn matches(&self) -> &[PageSummary] {
        match self {
            Self::Matches(items) => items,
            Self::NoPages | Self::NoMatches { .. } => &[],
        }
    }
}

/// Normalizes raw search input: trimmed and lowercased.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Filters `pages` by name substring.
///
/// An active query takes precedence: an empty collection searched for
/// "anna" reports `NoMatches`, so the view offers to reset the search.
pub fn filter_pages(pages: &[PageSummary], raw_query: &str) -> SearchOutcome {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return if pages.is_empty() {
            SearchOutcome::NoPages
        } else {
            SearchOutcome::Matches(pages.to_vec())
        };
    }

    let matches: Vec<PageSummary> = pages
        .iter()
        .filter(|page| page.name.to_lowercase().contains(&query))
        .cloned()
        .collect();
    if matches.is_empty() {
        SearchOutcome::NoMatches { query }
    } else {
        SearchOutcome::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_pages, normalize_query, SearchOutcome};

    #[test]
    fn query_is_trimmed_and_lowercased() {
        assert_eq!(normalize_query("  АННА Smith "), "анна smith");
    }

    #[test]
    fn active_query_over_empty_collection_reports_no_matches() {
        assert_eq!(filter_pages(&[], "   "), SearchOutcome::NoPages);
        assert_eq!(
            filter_pages(&[], " Anna "),
            SearchOutcome::NoMatches {
                query: "anna".to_string()
            }
        );
    }
}
