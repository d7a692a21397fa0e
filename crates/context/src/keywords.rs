// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Keyword filter
//!
//! Extracts human-facing keyword spellings from a set of terminal
//! candidates. Only reserved-word terminals survive; punctuation,
//! operators, literals and identifier placeholders are not something a
//! user types from a suggestion list. The quoted decoration on display
//! forms (`'SELECT'`) is stripped; the spelling itself is passed through
//! untouched - casing is the grammar's decision, not this filter's.

use caretql_grammar::{TokenCandidate, TokenKind};

/// Display spelling for one terminal, if it is a reserved word.
pub fn keyword_text(kind: TokenKind) -> Option<String> {
    if !kind.is_keyword() {
        return None;
    }
    kind.literal().map(strip_quotes)
}

/// Keyword spellings for a candidate set, in candidate order.
pub fn keyword_suggestions(candidates: &[TokenCandidate]) -> Vec<String> {
    candidates
        .iter()
        .filter_map(|candidate| keyword_text(candidate.kind))
        .collect()
}

fn strip_quotes(display: &str) -> String {
    display
        .strip_prefix('\'')
        .and_then(|d| d.strip_suffix('\''))
        .unwrap_or(display)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_text_strips_quotes() {
        assert_eq!(keyword_text(TokenKind::KwSelect), Some("SELECT".to_string()));
        assert_eq!(keyword_text(TokenKind::KwTable), Some("TABLE".to_string()));
    }

    #[test]
    fn test_non_keywords_yield_nothing() {
        assert_eq!(keyword_text(TokenKind::LParen), None);
        assert_eq!(keyword_text(TokenKind::Star), None);
        assert_eq!(keyword_text(TokenKind::Ident), None);
        assert_eq!(keyword_text(TokenKind::StringLiteral), None);
        assert_eq!(keyword_text(TokenKind::Eof), None);
    }

    #[test]
    fn test_suggestions_keep_candidate_order() {
        let candidates = vec![
            TokenCandidate {
                kind: TokenKind::KwTable,
            },
            TokenCandidate {
                kind: TokenKind::LParen,
            },
            TokenCandidate {
                kind: TokenKind::KwView,
            },
        ];
        assert_eq!(keyword_suggestions(&candidates), vec!["TABLE", "VIEW"]);
    }

    #[test]
    fn test_no_quote_characters_survive() {
        let candidates = vec![
            TokenCandidate {
                kind: TokenKind::KwCreate,
            },
            TokenCandidate {
                kind: TokenKind::KwDatabase,
            },
        ];
        for keyword in keyword_suggestions(&candidates) {
            assert!(!keyword.contains('\''));
        }
    }
}
