//! Single-person hero page (legacy document view).

use super::markup::{class_list, render, Html};
use crate::model::person::Person;

const NAME_PLACEHOLDER: &str = "Add a name to get started";
const QUOTE_PLACEHOLDER: &str = "Add a short message or quote";
const BIO_PLACEHOLDER: &str = "Fill in the description";
const ROLE_PLACEHOLDER: &str = "Tell who they were…";
const LOVED_PLACEHOLDER: &str = "Write what they especially loved…";
const MEMORY_PLACEHOLDER: &str = "Share what is important to remember";

/// Hero block: photo, name, years and quote.
pub fn render_hero(person: &Person) -> Html {
    render(|m| {
        match &person.photo {
            Some(photo) => {
                let alt = format!("Photo of {}", person.name);
                m.void_elem(
                    "img",
                    &[
                        ("class", "hero-photo"),
                        ("src", photo.as_str()),
                        ("alt", alt.as_str()),
                    ],
                );
            }
            None => {
                m.void_elem(
                    "img",
                    &[("class", "hero-photo photo-placeholder"), ("alt", "Add a photo")],
                );
            }
        }

        let (name, name_class) = with_placeholder(&person.name, NAME_PLACEHOLDER, "hero-name");
        m.text_elem("h1", &[("class", name_class.as_str())], name);
        m.text_elem("p", &[("class", "hero-years")], &person.years);
        let (quote, quote_class) = with_placeholder(&person.quote, QUOTE_PLACEHOLDER, "hero-quote");
        m.text_elem("blockquote", &[("class", quote_class.as_str())], quote);
    })
}

/// "About" block: biography and the three role-summary answers, each with
/// its own placeholder.
pub fn render_about(person: &Person) -> Html {
    render(|m| {
        let (bio, bio_class) = with_placeholder(&person.bio, BIO_PLACEHOLDER, "bio-text");
        m.elem("p", &[("class", bio_class.as_str())], |m| {
            m.multiline_text(bio);
        });

        let summary = &person.role_summary;
        for (field, value, placeholder) in [
            ("role", &summary.role, ROLE_PLACEHOLDER),
            ("loved", &summary.loved, LOVED_PLACEHOLDER),
            ("memory", &summary.key_memory, MEMORY_PLACEHOLDER),
        ] {
            let (text, class) = with_placeholder(value, placeholder, "bio-answer");
            m.text_elem("p", &[("class", class.as_str()), ("data-field", field)], text);
        }
    })
}

fn with_placeholder<'a>(value: &'a str, placeholder: &'a str, base_class: &str) -> (&'a str, String) {
    let missing = value.is_empty();
    let text = if missing { placeholder } else { value };
    (text, class_list(base_class, "empty-state", missing))
}
