//! Markup AST rendering
//!
//! Converts AST nodes into entity-annotated HTML. Rendering is total:
//! every node kind has a rule, and nodes missing the data their rule
//! needs (a link without a target, a custom emoji without a document id)
//! fall back to emitting their plain content.
//!
//! Escaping is applied to attribute values only; node content is emitted
//! verbatim inside its wrapping tag. That asymmetry is part of the output
//! contract and is expected to be handled by the consumer.

use std::borrow::Cow;

use crate::ast::{Node, SPOILER_ENTITY_TYPE};

/// Render a node sequence to an HTML string
pub fn render_html(nodes: &[Node]) -> String {
    let mut out = String::with_capacity(nodes.len() * 16);
    for node in nodes {
        render_node(node, &mut out);
    }
    out
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),

        Node::Bold(content) => wrap(out, "b", content),
        Node::Italic(content) => wrap(out, "i", content),
        Node::Strike(content) => wrap(out, "s", content),
        Node::Code(content) => wrap(out, "code", content),

        Node::Pre { language, code } => match language {
            Some(language) => {
                out.push_str("<pre data-language=\"");
                out.push_str(&escape_attribute(language));
                out.push_str("\">");
                out.push_str(code);
                out.push_str("</pre>");
            }
            None => wrap(out, "pre", code),
        },

        Node::Link { content, url } => match url {
            Some(url) => {
                out.push_str("<a href=\"");
                out.push_str(&escape_attribute(&normalize_url(url)));
                out.push_str("\">");
                out.push_str(content);
                out.push_str("</a>");
            }
            // No target: degrade to the display text.
            None => out.push_str(content),
        },

        Node::Spoiler(content) => {
            out.push_str("<span data-entity-type=\"");
            out.push_str(SPOILER_ENTITY_TYPE);
            out.push_str("\">");
            out.push_str(content);
            out.push_str("</span>");
        }

        Node::CustomEmoji {
            content,
            document_id,
        } => match document_id {
            Some(document_id) => {
                out.push_str("<img alt=\"");
                out.push_str(&escape_attribute(content));
                out.push_str("\" data-document-id=\"");
                out.push_str(&escape_attribute(document_id));
                out.push_str("\">");
            }
            None => out.push_str(content),
        },
    }
}

fn wrap(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Escape a string for use inside a double-quoted HTML attribute
pub fn escape_attribute(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }

    result
}

/// Normalize a link target into something a browser can follow.
///
/// Targets that already carry a scheme pass through untouched; targets
/// containing `@` become `mailto:` links; everything else is assumed to
/// be a bare host and gets an `https://` prefix.
pub fn normalize_url(url: &str) -> Cow<'_, str> {
    if url.contains("://") {
        Cow::Borrowed(url)
    } else if url.contains('@') {
        Cow::Owned(format!("mailto:{url}"))
    } else {
        Cow::Owned(format!("https://{url}"))
    }
}
