//! Family tree rendering over [`group_relatives`] rows.

use super::markup::{render, Html, Markup};
use crate::model::family_tree::{group_relatives, TreeSlot};
use crate::model::person::Person;
use crate::model::relative::Relative;

const EMPTY_TREE: &str = "Add loved ones to the tree";

/// Renders the tree; a page without relatives shows a placeholder.
pub fn render_family_tree(person: &Person, relatives: &[Relative]) -> Html {
    render(|m| {
        if relatives.is_empty() {
            m.text_elem("p", &[("class", "empty-state")], EMPTY_TREE);
            return;
        }

        let groups = group_relatives(relatives);
        m.elem("div", &[("class", "tree-container")], |m| {
            for row in groups.rows() {
                m.elem("div", &[("class", "tree-level")], |m| {
                    for slot in &row.slots {
                        match slot {
                            TreeSlot::Subject => subject_node(m, person),
                            TreeSlot::Relative(relative) => relative_node(m, relative),
                        }
                    }
                });
            }
        });
    })
}

fn subject_node(m: &mut Markup, person: &Person) {
    m.elem("div", &[("class", "tree-node main-person")], |m| {
        if let Some(photo) = &person.photo {
            m.void_elem(
                "img",
                &[
                    ("src", photo.as_str()),
                    ("class", "tree-node-photo"),
                    ("alt", person.name.as_str()),
                ],
            );
        }
        m.text_elem("div", &[("class", "tree-node-name")], &person.name);
        m.text_elem("div", &[("class", "tree-node-years")], &person.years);
    });
}

fn relative_node(m: &mut Markup, relative: &Relative) {
    m.elem(
        "div",
        &[
            ("class", "tree-node"),
            ("data-relative-id", relative.id.as_str()),
        ],
        |m| {
            if let Some(photo) = &relative.photo {
                m.void_elem(
                    "img",
                    &[
                        ("src", photo.as_str()),
                        ("class", "tree-node-photo"),
                        ("alt", relative.name.as_str()),
                    ],
                );
            }
            m.text_elem("div", &[("class", "tree-node-name")], &relative.name);
            m.text_elem(
                "div",
                &[("class", "tree-node-relation")],
                relative.relation.as_str(),
            );
            if !relative.years.is_empty() {
                m.text_elem("div", &[("class", "tree-node-years")], &relative.years);
            }
        },
    );
}
