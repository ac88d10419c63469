//! Page list grid.

use super::markup::{class_list, render, Html, Markup};
use crate::model::page::PageSummary;
use crate::search::filter::SearchOutcome;

const UNNAMED_PAGE: &str = "Untitled";
const PHOTO_PLACEHOLDER: &str = "👤";

/// Card view model for one index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCardView {
    pub id: String,
    pub name: String,
    pub years: String,
    pub photo: Option<String>,
    pub token_id: String,
    pub href: String,
}

impl PageCardView {
    pub fn from_summary(summary: &PageSummary) -> Self {
        let name = if summary.name.trim().is_empty() {
            UNNAMED_PAGE.to_string()
        } else {
            summary.name.clone()
        };
        Self {
            id: summary.id.clone(),
            name,
            years: summary.years.clone(),
            photo: summary.photo.clone(),
            token_id: token_id(&summary.id),
            href: profile_href(&summary.id),
        }
    }
}

/// Link to a page's profile view.
pub fn profile_href(page_id: &str) -> String {
    format!("profile.html?id={page_id}")
}

/// Display token `EMT-NNNN` derived from a page id.
///
/// Uses the 31-multiplier string hash over UTF-16 code units with 32-bit
/// wrapping, so tokens match those shown by the browser editor.
pub fn token_id(page_id: &str) -> String {
    let hash = page_id.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    format!("EMT-{:04}", (hash % 10_000).abs())
}

/// Renders the grid for a search outcome.
pub fn render_pages_grid(outcome: &SearchOutcome) -> Html {
    render(|m| match outcome {
        SearchOutcome::NoPages => {
            m.elem("div", &[("class", "empty-state")], |m| {
                m.text_elem("p", &[], "The collection is empty");
                m.text_elem("p", &[("class", "hint")], "Create the first memorial token");
            });
        }
        SearchOutcome::NoMatches { query } => {
            m.elem("div", &[("class", "empty-state")], |m| {
                m.text_elem("p", &[], &format!("Nothing found for «{query}»"));
                m.text_elem(
                    "button",
                    &[
                        ("class", "btn btn-secondary"),
                        ("data-action", "clear-search"),
                    ],
                    "Reset search",
                );
            });
        }
        SearchOutcome::Matches(pages) => {
            for summary in pages {
                page_card(m, &PageCardView::from_summary(summary));
            }
        }
    })
}

fn page_card(m: &mut Markup, card: &PageCardView) {
    m.elem(
        "article",
        &[("class", "page-card"), ("data-page-id", card.id.as_str())],
        |m| {
            m.text_elem(
                "button",
                &[
                    ("class", "favorite-btn"),
                    ("title", "Add to favorites"),
                    ("aria-label", "Add to favorites"),
                ],
                "♡",
            );

            let photo_class = class_list("page-card-photo", "placeholder", card.photo.is_none());
            m.elem("div", &[("class", photo_class.as_str())], |m| match &card.photo {
                Some(photo) => {
                    m.void_elem("img", &[("src", photo.as_str()), ("alt", card.name.as_str())]);
                }
                None => {
                    m.text_elem("span", &[], PHOTO_PLACEHOLDER);
                }
            });

            m.text_elem("h3", &[("class", "page-card-name")], &card.name);
            m.text_elem("p", &[("class", "page-card-years")], &card.years);
            m.text_elem(
                "p",
                &[("class", "page-card-token")],
                &format!("#{}", card.token_id),
            );
            m.elem("div", &[("class", "page-card-actions")], |m| {
                m.text_elem(
                    "a",
                    &[("class", "btn btn-primary"), ("href", card.href.as_str())],
                    "Open token",
                );
            });
        },
    );
}

#[cfg(test)]
mod tests {
    use super::token_id;

    #[test]
    fn token_matches_reference_hash() {
        assert_eq!(token_id("a"), "EMT-0097");
        assert_eq!(token_id("ab"), "EMT-3105");
        assert_eq!(token_id(""), "EMT-0000");
    }

    #[test]
    fn token_handles_negative_wrapped_hashes() {
        let token = token_id("page_1700000000000_zzzzzzzzz");
        assert!(token.starts_with("EMT-"));
        assert_eq!(token.len(), 8);
    }
}
