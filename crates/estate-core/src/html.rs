//! Plain-text rendering of the small HTML fragments the API returns.

use scraper::{Html, Node};

/// Tags that separate words when removed.
const BLOCK_TAGS: &[&str] = &[
    "br", "p", "div", "li", "ul", "ol", "tr", "td", "th", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Elements whose text is never shown.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template"];

/// Parse `html` as a body fragment and return its text content with
/// whitespace collapsed.
///
/// Entities are decoded by the HTML parser, so stray `<` characters and
/// quoted attribute values containing `>` are handled the way a browser
/// handles them.
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());

    for node in fragment.tree.root().descendants() {
        match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|parent| {
                    matches!(parent.value(), Node::Element(el) if HIDDEN_TAGS.contains(&el.name()))
                });
                if !hidden {
                    out.push_str(text);
                }
            }
            Node::Element(el) if BLOCK_TAGS.contains(&el.name()) => out.push(' '),
            _ => {}
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
