//! # telemark
//!
//! Convert chat-style markdown to entity-annotated HTML.
//!
//! The recognized syntax is a small fixed set of inline markers:
//! `**bold**`, `__italic__`, `~~strike~~`, `||spoiler||`, `` `code` ``,
//! triple-backtick fences with an optional language tag, and
//! `[display](target)` links. A link target carrying the `customEmoji:`
//! scheme becomes a custom-emoji reference instead of a hyperlink.
//!
//! ## Design
//!
//! Parsing is total: there is no failure path for any input string.
//! Unmatched markers degrade - an unterminated span still becomes a node
//! over the remaining input, and orphaned link delimiters are dropped.
//! Each call is an independent pure function of its input; nothing is
//! shared between invocations beyond constant delimiter tables.
//!
//! ## Example
//!
//! ```rust
//! let html = telemark::convert("plain **bold** [go](example.com)").unwrap();
//! assert_eq!(html, "plain <b>bold</b> <a href=\"https://example.com\">go</a>");
//! ```
//!
//! The intermediate AST is available for callers that post-process the
//! tree before rendering:
//!
//! ```rust
//! use telemark::Node;
//!
//! let nodes = telemark::parse("**hi**");
//! assert_eq!(nodes, vec![Node::Bold("hi".to_string())]);
//! ```

mod lexer;
mod parser;
pub mod token;

pub use lexer::tokenize;
pub use parser::build_tree;
pub use telemark_core::{
    escape_attribute, normalize_url, render_html, Node, CUSTOM_EMOJI_SCHEME, SPOILER_ENTITY_TYPE,
};
pub use token::Token;

/// Error type for markup conversion
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("conversion error: {0}")]
    Conversion(String),
}

pub type Result<T> = std::result::Result<T, MarkupError>;

/// Parse a source string into top-level AST nodes. Never fails; malformed
/// markers degrade to plain text content.
pub fn parse(text: &str) -> Vec<Node> {
    build_tree(tokenize(text))
}

/// Parse a source string and render it to entity-annotated HTML
pub fn convert(text: &str) -> Result<String> {
    Ok(render_html(&parse(text)))
}
