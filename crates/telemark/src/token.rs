//! Lexical tokens produced by the tokenizer.

/// One lexical unit of the source text.
///
/// Delimiter tokens carry no payload; the literal marker text is never
/// consumed downstream. The only metadata-bearing token is [`Token::PreStart`],
/// which holds the language tag from its fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal run of unformatted text
    Text(String),

    BoldStart,
    BoldEnd,

    ItalicStart,
    ItalicEnd,

    StrikeStart,
    StrikeEnd,

    CodeStart,
    CodeEnd,

    /// Triple-backtick fence. The language tag is the remainder of the
    /// fence line and may be empty. A closing fence lexes as another
    /// `PreStart`, so the tokenizer itself never emits [`Token::PreEnd`].
    PreStart { language: String },

    /// Recognized by the tree builder as the fenced-block terminator,
    /// though the tokenizer never produces it (see [`Token::PreStart`]).
    PreEnd,

    SpoilerStart,
    SpoilerEnd,

    /// `[` - always opens a link, with no toggle logic
    LinkStart,

    /// `](` - separates link display text from the target. Emitted
    /// wherever the sequence appears, even outside any open link.
    LinkTextEnd,

    /// `)` - terminates a link target
    LinkUrlEnd,
}
