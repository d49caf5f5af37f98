//! telemark-core - Markup AST and entity-HTML rendering
//!
//! This crate provides the AST node type for chat-style markdown and the
//! renderer that turns a node sequence into entity-annotated HTML. The
//! tokenizer and tree builder that produce the AST live in the `telemark`
//! crate.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──tokenize──▶ Tokens ──build──▶ ┌────────────┐
//!                                                 │ Markup AST │ ──▶ HTML String
//!                                                 └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use telemark_core::{render_html, Node};
//!
//! let ast = vec![
//!     Node::Text("This is ".to_string()),
//!     Node::Bold("bold".to_string()),
//!     Node::Text(" text.".to_string()),
//! ];
//!
//! assert_eq!(render_html(&ast), "This is <b>bold</b> text.");
//! ```

mod ast;
mod render;

pub use ast::{Node, CUSTOM_EMOJI_SCHEME, SPOILER_ENTITY_TYPE};
pub use render::{escape_attribute, normalize_url, render_html};
