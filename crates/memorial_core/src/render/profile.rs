//! Profile (detail) view of an indexed page.

use super::markup::{class_list, render, Html, Markup};
use crate::model::person::Person;
use crate::model::timeline::Timeline;

const NAME_MISSING: &str = "Name not specified";
const NOT_SPECIFIED: &str = "Not specified";
const NO_BIOGRAPHY: &str = "No biography yet";

/// One line of a sidebar timeline section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRowView {
    pub years: String,
    pub details: String,
}

/// Sidebar section view model; empty `rows` renders a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineSectionView {
    pub key: &'static str,
    pub title: &'static str,
    pub rows: Vec<TimelineRowView>,
}

/// Projects the timeline into four sidebar sections.
pub fn timeline_sections(timeline: &Timeline) -> Vec<TimelineSectionView> {
    let birth = &timeline.birth;
    let birth_rows = if birth.is_blank() {
        Vec::new()
    } else {
        vec![TimelineRowView {
            years: String::new(),
            details: join_non_empty(&birth.date, ", ", &birth.place),
        }]
    };

    vec![
        TimelineSectionView {
            key: "birth",
            title: "Birth",
            rows: birth_rows,
        },
        TimelineSectionView {
            key: "education",
            title: "Education",
            rows: timeline
                .education
                .iter()
                .map(|item| TimelineRowView {
                    years: item.years.clone(),
                    details: if item.institution.is_empty() {
                        item.details.clone()
                    } else {
                        item.institution.clone()
                    },
                })
                .collect(),
        },
        TimelineSectionView {
            key: "career",
            title: "Career",
            rows: timeline
                .career
                .iter()
                .map(|item| TimelineRowView {
                    years: item.years.clone(),
                    details: join_non_empty(&item.position, " — ", &item.company),
                })
                .collect(),
        },
        TimelineSectionView {
            key: "family",
            title: "Family",
            rows: timeline
                .family
                .iter()
                .map(|item| TimelineRowView {
                    years: item.years.clone(),
                    details: item.members.clone(),
                })
                .collect(),
        },
    ]
}

/// Browser title for the profile view.
pub fn page_title(person: &Person) -> String {
    format!("{} — Memorial page", person.name)
}

pub fn render_profile_header(person: &Person) -> Html {
    render(|m| {
        let photo_class = class_list("profile-photo", "placeholder", person.photo.is_none());
        m.elem("div", &[("class", photo_class.as_str())], |m| match &person.photo {
            Some(photo) => {
                m.void_elem("img", &[("src", photo.as_str()), ("alt", person.name.as_str())]);
            }
            None => {
                m.text("👤");
            }
        });

        let name = if person.name.is_empty() {
            NAME_MISSING
        } else {
            person.name.as_str()
        };
        m.text_elem("h1", &[("class", "profile-name")], name);
        m.text_elem("p", &[("class", "profile-years")], &person.years);
        m.text_elem("p", &[("class", "profile-location")], &person.location);
    })
}

pub fn render_timeline_sidebar(timeline: &Timeline) -> Html {
    render(|m| {
        for section in timeline_sections(timeline) {
            m.elem(
                "section",
                &[("class", "timeline-section"), ("data-section", section.key)],
                |m| {
                    m.text_elem("h3", &[], section.title);
                    timeline_rows(m, &section);
                },
            );
        }
    })
}

fn timeline_rows(m: &mut Markup, section: &TimelineSectionView) {
    if section.rows.is_empty() {
        m.text_elem("p", &[("class", "empty-state")], NOT_SPECIFIED);
        return;
    }
    for row in &section.rows {
        m.elem("div", &[("class", "timeline-item")], |m| {
            if !row.years.is_empty() {
                m.text_elem("span", &[("class", "years")], &row.years);
            }
            m.text_elem("span", &[("class", "details")], &row.details);
        });
    }
}

/// Biography tab: free text plus the three role-summary answers.
pub fn render_bio_tab(person: &Person) -> Html {
    render(|m| {
        let summary = &person.role_summary;
        if person.bio.is_empty() && summary.is_empty() {
            m.text_elem("p", &[("class", "empty-state")], NO_BIOGRAPHY);
            return;
        }

        if !person.bio.is_empty() {
            m.elem("p", &[], |m| {
                m.multiline_text(&person.bio);
            });
        }
        for (heading, answer) in [
            ("Who they were", &summary.role),
            ("What they loved", &summary.loved),
            ("What matters most to remember", &summary.key_memory),
        ] {
            if !answer.is_empty() {
                m.text_elem("h4", &[], heading);
                m.text_elem("p", &[], answer);
            }
        }
    })
}

fn join_non_empty(left: &str, separator: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (false, false) => format!("{left}{separator}{right}"),
        (false, true) => left.to_string(),
        (true, false) => right.to_string(),
        (true, true) => String::new(),
    }
}
