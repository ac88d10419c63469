//! Minimal HTML builder that escapes by construction.

use std::fmt::{Display, Formatter};

/// Finished HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Html {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attribute list: static names, escaped values.
pub type Attrs<'a> = &'a [(&'static str, &'a str)];

/// Streaming HTML writer.
///
/// Every text node and attribute value goes through [`escape_into`]; there is
/// no raw-insertion method.
#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `<tag attrs>`, the body, then `</tag>`.
    pub fn elem(
        &mut self,
        tag: &'static str,
        attrs: Attrs<'_>,
        body: impl FnOnce(&mut Markup),
    ) -> &mut Self {
        self.open_tag(tag, attrs);
        body(self);
        self.close_tag(tag);
        self
    }

    /// Element whose only child is escaped text.
    pub fn text_elem(&mut self, tag: &'static str, attrs: Attrs<'_>, text: &str) -> &mut Self {
        self.elem(tag, attrs, |m| {
            m.text(text);
        })
    }

    /// Element without children or closing tag (`img`, `br`).
    pub fn void_elem(&mut self, tag: &'static str, attrs: Attrs<'_>) -> &mut Self {
        self.open_tag(tag, attrs);
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        escape_into(&mut self.buf, text);
        self
    }

    /// Escaped text with every line break rendered as `<br>`.
    pub fn multiline_text(&mut self, text: &str) -> &mut Self {
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                self.buf.push_str("<br>");
            }
            escape_into(&mut self.buf, line.strip_suffix('\r').unwrap_or(line));
        }
        self
    }

    pub fn finish(self) -> Html {
        Html(self.buf)
    }

    fn open_tag(&mut self, tag: &'static str, attrs: Attrs<'_>) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            escape_into(&mut self.buf, value);
            self.buf.push('"');
        }
        self.buf.push('>');
    }

    fn close_tag(&mut self, tag: &'static str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }
}

/// Builds a fragment in one expression.
pub fn render(build: impl FnOnce(&mut Markup)) -> Html {
    let mut markup = Markup::new();
    build(&mut markup);
    markup.finish()
}

/// Joins CSS classes, appending `extra` only when `enabled`.
pub fn class_list(base: &str, extra: &str, enabled: bool) -> String {
    if enabled {
        format!("{base} {extra}")
    } else {
        base.to_string()
    }
}

fn escape_into(buf: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            other => buf.push(other),
        }
    }
}
