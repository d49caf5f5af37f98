//! Token stream to AST assembly.
//!
//! The tree builder is total: any token sequence yields a node list.
//! Malformed input degrades instead of failing - a start marker that is
//! never closed still produces a node over the remaining input, while an
//! end marker with no open construct is dropped.

use smallvec::SmallVec;

use telemark_core::{Node, CUSTOM_EMOJI_SCHEME};

use crate::token::Token;

// Most messages contain only a handful of top-level spans - avoid heap
// allocation for the common case.
type NodeVec = SmallVec<[Node; 8]>;

/// Assemble an ordered token sequence into top-level AST nodes
pub fn build_tree(tokens: Vec<Token>) -> Vec<Node> {
    let mut nodes = NodeVec::new();
    let mut tokens = tokens.into_iter();

    while let Some(token) = tokens.next() {
        match token {
            Token::Text(text) => nodes.push(Node::Text(text)),

            Token::BoldStart => {
                nodes.push(Node::Bold(collect_until(&mut tokens, &Token::BoldEnd)));
            }
            Token::ItalicStart => {
                nodes.push(Node::Italic(collect_until(&mut tokens, &Token::ItalicEnd)));
            }
            Token::StrikeStart => {
                nodes.push(Node::Strike(collect_until(&mut tokens, &Token::StrikeEnd)));
            }
            Token::CodeStart => {
                nodes.push(Node::Code(collect_until(&mut tokens, &Token::CodeEnd)));
            }
            Token::SpoilerStart => {
                nodes.push(Node::Spoiler(collect_until(
                    &mut tokens,
                    &Token::SpoilerEnd,
                )));
            }

            Token::PreStart { language } => {
                let code = collect_until(&mut tokens, &Token::PreEnd);
                nodes.push(Node::Pre {
                    language: non_empty(language),
                    code,
                });
            }

            Token::LinkStart => {
                let content = collect_until(&mut tokens, &Token::LinkTextEnd);
                let target = collect_until(&mut tokens, &Token::LinkUrlEnd);
                nodes.push(link_node(content, target));
            }

            // End markers with no open construct carry no text; drop them.
            Token::BoldEnd
            | Token::ItalicEnd
            | Token::StrikeEnd
            | Token::CodeEnd
            | Token::PreEnd
            | Token::SpoilerEnd
            | Token::LinkTextEnd
            | Token::LinkUrlEnd => {}
        }
    }

    nodes.into_vec()
}

/// Concatenate the content of text tokens up to (and consuming) the `end`
/// token. Other delimiter tokens inside the span contribute nothing. If
/// the stream ends first, whatever was accumulated is returned unchanged.
fn collect_until(tokens: &mut impl Iterator<Item = Token>, end: &Token) -> String {
    let mut content = String::new();

    for token in tokens {
        if &token == end {
            break;
        }
        if let Token::Text(text) = token {
            content.push_str(&text);
        }
    }

    content
}

/// Resolve a completed link construct into a link or custom-emoji node
fn link_node(content: String, target: String) -> Node {
    match target.strip_prefix(CUSTOM_EMOJI_SCHEME) {
        Some(id) => Node::CustomEmoji {
            content,
            document_id: non_empty(id.to_string()),
        },
        None => Node::Link {
            content,
            url: non_empty(target),
        },
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    #[test]
    fn test_text_token_becomes_text_node() {
        let nodes = build_tree(vec![text("hello")]);
        assert_eq!(nodes, vec![Node::Text("hello".to_string())]);
    }

    #[test]
    fn test_bold_span() {
        let nodes = build_tree(vec![Token::BoldStart, text("hi"), Token::BoldEnd]);
        assert_eq!(nodes, vec![Node::Bold("hi".to_string())]);
    }

    #[test]
    fn test_unterminated_start_consumes_rest() {
        let nodes = build_tree(vec![Token::BoldStart, text("bold without end")]);
        assert_eq!(nodes, vec![Node::Bold("bold without end".to_string())]);
    }

    #[test]
    fn test_inner_markers_flatten() {
        // Nested delimiters contribute their text, not structure.
        let nodes = build_tree(vec![
            Token::BoldStart,
            text("a "),
            Token::ItalicStart,
            text("b"),
            Token::ItalicEnd,
            Token::BoldEnd,
        ]);
        assert_eq!(nodes, vec![Node::Bold("a b".to_string())]);
    }

    #[test]
    fn test_stray_end_tokens_dropped() {
        let nodes = build_tree(vec![
            Token::BoldEnd,
            text("a"),
            Token::LinkTextEnd,
            text("b"),
            Token::LinkUrlEnd,
        ]);
        assert_eq!(
            nodes,
            vec![Node::Text("a".to_string()), Node::Text("b".to_string())]
        );
    }

    #[test]
    fn test_pre_takes_language_from_opening_fence() {
        let nodes = build_tree(vec![
            Token::PreStart {
                language: "js".to_string(),
            },
            text("console.log(1)\n"),
            Token::PreStart {
                language: String::new(),
            },
        ]);
        assert_eq!(
            nodes,
            vec![Node::Pre {
                language: Some("js".to_string()),
                code: "console.log(1)\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_pre_end_terminates_block() {
        let nodes = build_tree(vec![
            Token::PreStart {
                language: "sh".to_string(),
            },
            text("ls\n"),
            Token::PreEnd,
            text("after"),
        ]);
        assert_eq!(
            nodes,
            vec![
                Node::Pre {
                    language: Some("sh".to_string()),
                    code: "ls\n".to_string(),
                },
                Node::Text("after".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_language_maps_to_none() {
        let nodes = build_tree(vec![Token::PreStart {
            language: String::new(),
        }]);
        assert_eq!(
            nodes,
            vec![Node::Pre {
                language: None,
                code: String::new(),
            }]
        );
    }

    #[test]
    fn test_link() {
        let nodes = build_tree(vec![
            Token::LinkStart,
            text("go"),
            Token::LinkTextEnd,
            text("example.com"),
            Token::LinkUrlEnd,
        ]);
        assert_eq!(
            nodes,
            vec![Node::Link {
                content: "go".to_string(),
                url: Some("example.com".to_string()),
            }]
        );
    }

    #[test]
    fn test_link_with_empty_target() {
        let nodes = build_tree(vec![
            Token::LinkStart,
            text("x"),
            Token::LinkTextEnd,
            Token::LinkUrlEnd,
        ]);
        assert_eq!(
            nodes,
            vec![Node::Link {
                content: "x".to_string(),
                url: None,
            }]
        );
    }

    #[test]
    fn test_truncated_link_degrades() {
        // Stream ends before the separator: both segments run dry.
        let nodes = build_tree(vec![Token::LinkStart, text("abc")]);
        assert_eq!(
            nodes,
            vec![Node::Link {
                content: "abc".to_string(),
                url: None,
            }]
        );
    }

    #[test]
    fn test_custom_emoji_scheme_stripped() {
        let nodes = build_tree(vec![
            Token::LinkStart,
            text("😀"),
            Token::LinkTextEnd,
            text("customEmoji:123"),
            Token::LinkUrlEnd,
        ]);
        assert_eq!(
            nodes,
            vec![Node::CustomEmoji {
                content: "😀".to_string(),
                document_id: Some("123".to_string()),
            }]
        );
    }

    #[test]
    fn test_custom_emoji_with_empty_id() {
        let nodes = build_tree(vec![
            Token::LinkStart,
            text("😀"),
            Token::LinkTextEnd,
            text("customEmoji:"),
            Token::LinkUrlEnd,
        ]);
        assert_eq!(
            nodes,
            vec![Node::CustomEmoji {
                content: "😀".to_string(),
                document_id: None,
            }]
        );
    }

    #[test]
    fn test_source_order_preserved() {
        let nodes = build_tree(vec![
            text("a "),
            Token::BoldStart,
            text("b"),
            Token::BoldEnd,
            text(" c"),
        ]);
        assert_eq!(
            nodes,
            vec![
                Node::Text("a ".to_string()),
                Node::Bold("b".to_string()),
                Node::Text(" c".to_string()),
            ]
        );
    }
}
