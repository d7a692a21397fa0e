// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Token stream adapter
//!
//! Wraps the generated lexer as an indexable sequence of [`Token`]s.
//! Tokenization is infallible: unrecognized input degrades to
//! [`TokenKind::Unknown`] tokens and the stream always ends with a
//! synthesized [`TokenKind::Eof`] sentinel spanning the empty range at
//! end-of-text. Trivia (whitespace and comments) never appears in the
//! stream.

use std::ops::Range;

use logos::Logos;
use serde::{Deserialize, Serialize};

use crate::token::TokenKind;

/// A single lexed token.
///
/// `index` is the token's position in the original, unsplit stream; `span`
/// is a byte range into the original source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub index: usize,
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

/// Randomly-accessible token sequence for one source text.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    source_len: usize,
}

impl TokenStream {
    /// Lex `text` into a stream. Never fails; the final token is always
    /// the Eof sentinel.
    pub fn tokenize(text: &str) -> Self {
        let mut lexer = TokenKind::lexer(text);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            let kind = result.unwrap_or(TokenKind::Unknown);
            tokens.push(Token {
                index: tokens.len(),
                kind,
                text: lexer.slice().to_string(),
                span: lexer.span(),
            });
        }
        tokens.push(Token {
            index: tokens.len(),
            kind: TokenKind::Eof,
            text: String::new(),
            span: text.len()..text.len(),
        });
        Self {
            tokens,
            source_len: text.len(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        // The Eof sentinel is always present.
        self.tokens.len() <= 1
    }

    /// Index of the token a caret byte offset resolves to: the first token
    /// whose span ends at or after the (clamped) offset. A caret touching
    /// the tail of a word resolves to that word; a caret in trailing
    /// whitespace resolves to the next token, worst case the Eof sentinel.
    pub fn caret_token_index(&self, caret_offset: usize) -> usize {
        let caret = caret_offset.min(self.source_len);
        self.tokens
            .iter()
            .position(|t| t.span.end >= caret)
            .unwrap_or(self.tokens.len() - 1)
    }
}
