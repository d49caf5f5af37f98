//! Markup Abstract Syntax Tree
//!
//! This module defines the AST nodes for parsed chat-style markdown.
//! The tree is flat: every node carries its span's literal text directly,
//! and construct-specific data lives in typed fields rather than a
//! string-keyed metadata map.

/// Scheme prefix that turns a link target into a custom-emoji reference.
pub const CUSTOM_EMOJI_SCHEME: &str = "customEmoji:";

/// Entity-type attribute value emitted for spoiler spans.
pub const SPOILER_ENTITY_TYPE: &str = "MessageEntitySpoiler";

/// A parsed markup node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text run
    Text(String),

    /// Bold span (`**…**`)
    Bold(String),

    /// Italic span (`__…__`)
    Italic(String),

    /// Strikethrough span (`~~…~~`)
    Strike(String),

    /// Inline code span (`` `…` ``)
    Code(String),

    /// Fenced code block with an optional language tag
    Pre {
        language: Option<String>,
        code: String,
    },

    /// Link with display text and an optional target.
    ///
    /// The target is stored verbatim; scheme normalization happens at
    /// render time. `None` means the source carried no target and the
    /// node degrades to plain text when rendered.
    Link {
        content: String,
        url: Option<String>,
    },

    /// Spoiler span (`||…||`)
    Spoiler(String),

    /// Custom-emoji reference: display text plus the emoji document id
    /// taken from a `customEmoji:` link target
    CustomEmoji {
        content: String,
        document_id: Option<String>,
    },
}

impl Node {
    /// The literal text carried by this node (display text for links and
    /// custom emoji, code body for code constructs).
    pub fn content(&self) -> &str {
        match self {
            Node::Text(text)
            | Node::Bold(text)
            | Node::Italic(text)
            | Node::Strike(text)
            | Node::Code(text)
            | Node::Spoiler(text) => text,
            Node::Pre { code, .. } => code,
            Node::Link { content, .. } => content,
            Node::CustomEmoji { content, .. } => content,
        }
    }
}
