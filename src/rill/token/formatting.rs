//! Formatting helpers for tokens and trees
//!
//! `detokenize` reconstructs a readable one-line rendition of a token
//! sequence for diagnostics. `tree_to_json` dumps a finished tree for
//! downstream tooling; the tree types carry serde derives so consumers can
//! also serialize sub-trees directly.

use crate::rill::token::core::Token;
use crate::rill::token::tree::SynNode;

/// Render a token sequence as space-separated source text.
///
/// This is a diagnostic aid, not a source reconstruction: original spacing
/// is not preserved.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize a finished tree to pretty-printed JSON
pub fn tree_to_json(tree: &[SynNode]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rill::token::core::{TokenKind, TokenMeta};
    use crate::rill::token::tree::{LiteralExpr, NameExpr};

    fn tok(kind: TokenKind, text: &str, start: usize) -> Token {
        Token::new(kind, text, TokenMeta::new(start..start + text.len(), 1))
    }

    #[test]
    fn test_detokenize() {
        let tokens = vec![
            tok(TokenKind::Name, "foo", 0),
            tok(TokenKind::OpenParen, "(", 3),
            tok(TokenKind::Number, "1", 4),
            tok(TokenKind::CloseParen, ")", 5),
        ];
        assert_eq!(detokenize(&tokens), "foo ( 1 )");
    }

    #[test]
    fn test_detokenize_empty() {
        assert_eq!(detokenize(&[]), "");
    }

    #[test]
    fn test_tree_to_json_contains_structure() {
        let tree = vec![
            SynNode::Name(NameExpr {
                name: "foo".to_string(),
                meta: TokenMeta::new(0..3, 1),
            }),
            SynNode::Literal(LiteralExpr {
                token: tok(TokenKind::Number, "42", 4),
            }),
        ];
        let json = tree_to_json(&tree).unwrap();
        assert!(json.contains("\"Name\""));
        assert!(json.contains("\"foo\""));
        assert!(json.contains("\"42\""));
    }
}
