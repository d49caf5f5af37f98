//! Markdown tokenizer.
//!
//! A single left-to-right pass over the source string. Characters that
//! match no marker accumulate in a text buffer, which is flushed as a
//! [`Token::Text`] before any delimiter token and again at end of input,
//! so the token stream covers the whole source with no gaps.

use crate::token::Token;

/// Two-character symmetric delimiters, checked in this order ahead of the
/// single-character markers.
const TOGGLE_DELIMITERS: &[(&str, Style)] = &[
    ("**", Style::Bold),
    ("__", Style::Italic),
    ("~~", Style::Strike),
    ("||", Style::Spoiler),
];

/// Fence marker. Checked before the single backtick; reversing that order
/// would tokenize every fence as inline code.
const FENCE: &str = "```";

const CODE_TICK: char = '`';
const LINK_OPEN: char = '[';
const LINK_SEPARATOR: &str = "](";
const LINK_CLOSE: char = ')';

/// Symmetric formatting kinds whose marker toggles between start and end
#[derive(Debug, Clone, Copy)]
enum Style {
    Bold,
    Italic,
    Strike,
    Spoiler,
    Code,
}

impl Style {
    fn start_token(self) -> Token {
        match self {
            Style::Bold => Token::BoldStart,
            Style::Italic => Token::ItalicStart,
            Style::Strike => Token::StrikeStart,
            Style::Spoiler => Token::SpoilerStart,
            Style::Code => Token::CodeStart,
        }
    }

    fn end_token(self) -> Token {
        match self {
            Style::Bold => Token::BoldEnd,
            Style::Italic => Token::ItalicEnd,
            Style::Strike => Token::StrikeEnd,
            Style::Spoiler => Token::SpoilerEnd,
            Style::Code => Token::CodeEnd,
        }
    }
}

/// One open-flag per symmetric kind. A marker seen while its kind is open
/// closes it; otherwise it opens it. At any scan position a kind is simply
/// open or closed, never open more than once.
#[derive(Debug, Default)]
struct OpenState {
    bold: bool,
    italic: bool,
    strike: bool,
    spoiler: bool,
    code: bool,
}

impl OpenState {
    /// Flip the flag for `style`; returns true if this occurrence closes
    fn toggle(&mut self, style: Style) -> bool {
        let flag = match style {
            Style::Bold => &mut self.bold,
            Style::Italic => &mut self.italic,
            Style::Strike => &mut self.strike,
            Style::Spoiler => &mut self.spoiler,
            Style::Code => &mut self.code,
        };
        let was_open = *flag;
        *flag = !was_open;
        was_open
    }
}

/// Tokenize a source string into an ordered token sequence
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text).run()
}

struct Lexer<'a> {
    text: &'a str,
    pos: usize,
    open: OpenState,
    /// `)` only terminates a link target once some `](` separator has been
    /// seen earlier in the pass - anywhere, not just inside the current
    /// link. Coarse, but matches the established grammar.
    seen_link_separator: bool,
    tokens: Vec<Token>,
    buffer: String,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            open: OpenState::default(),
            seen_link_separator: false,
            tokens: Vec::new(),
            buffer: String::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while self.pos < self.text.len() {
            if self.scan_toggle() || self.scan_backtick() || self.scan_link() {
                continue;
            }

            // Not a marker: accumulate one character of plain text.
            let Some(ch) = self.rest().chars().next() else {
                break;
            };
            self.buffer.push(ch);
            self.pos += ch.len_utf8();
        }

        self.flush_text();
        self.tokens
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Flush the pending text buffer, then append a delimiter token
    fn push(&mut self, token: Token) {
        self.flush_text();
        self.tokens.push(token);
    }

    fn flush_text(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.tokens.push(Token::Text(text));
        }
    }

    fn scan_toggle(&mut self) -> bool {
        for &(marker, style) in TOGGLE_DELIMITERS {
            if self.rest().starts_with(marker) {
                self.pos += marker.len();
                let closes = self.open.toggle(style);
                self.push(if closes {
                    style.end_token()
                } else {
                    style.start_token()
                });
                return true;
            }
        }
        false
    }

    fn scan_backtick(&mut self) -> bool {
        if self.rest().starts_with(FENCE) {
            self.pos += FENCE.len();
            let language = self.take_fence_line();
            self.push(Token::PreStart { language });
            true
        } else if self.rest().starts_with(CODE_TICK) {
            self.pos += CODE_TICK.len_utf8();
            let closes = self.open.toggle(Style::Code);
            self.push(if closes {
                Token::CodeEnd
            } else {
                Token::CodeStart
            });
            true
        } else {
            false
        }
    }

    /// Consume the rest of the fence line as a language tag. The newline
    /// itself is consumed but not part of the tag.
    fn take_fence_line(&mut self) -> String {
        let rest = self.rest();
        match rest.find('\n') {
            Some(end) => {
                self.pos += end + 1;
                rest[..end].to_string()
            }
            None => {
                self.pos = self.text.len();
                rest.to_string()
            }
        }
    }

    fn scan_link(&mut self) -> bool {
        let rest = self.rest();
        if rest.starts_with(LINK_OPEN) {
            self.pos += LINK_OPEN.len_utf8();
            self.push(Token::LinkStart);
            true
        } else if rest.starts_with(LINK_SEPARATOR) {
            self.pos += LINK_SEPARATOR.len();
            self.seen_link_separator = true;
            self.push(Token::LinkTextEnd);
            true
        } else if rest.starts_with(LINK_CLOSE) && self.seen_link_separator {
            self.pos += LINK_CLOSE.len_utf8();
            self.push(Token::LinkUrlEnd);
            true
        } else {
            false
        }
    }
}
