// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Statement splitter
//!
//! Partitions a token stream into statements at top-level `;` tokens and
//! locates the statement a caret token falls in. Only the index-offset
//! contract matters to the rest of the pipeline: adding
//! [`StatementSlice::token_index_offset`] to an index local to the slice
//! recovers its position in the original stream.

use std::ops::Range;

use caretql_grammar::{Token, TokenKind};

/// The sub-statement containing the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSlice {
    /// Token index range in the original stream, terminator included.
    pub range: Range<usize>,
    /// Translation from slice-local token indices back to the stream.
    pub token_index_offset: usize,
}

/// Locate the statement containing `caret_token_index`.
///
/// A caret resolving to a `;` token belongs to the statement that
/// semicolon terminates; a caret past it belongs to the next statement. A
/// caret on the Eof sentinel after a trailing `;` yields a slice holding
/// only the sentinel.
pub fn split(tokens: &[Token], caret_token_index: usize) -> StatementSlice {
    let mut start = 0;
    for (index, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Semicolon {
            if caret_token_index <= index {
                return StatementSlice {
                    range: start..index + 1,
                    token_index_offset: start,
                };
            }
            start = index + 1;
        }
    }
    StatementSlice {
        range: start..tokens.len(),
        token_index_offset: start,
    }
}

/// Token index ranges of every statement in the stream, terminators
/// included and the Eof sentinel excluded. Statements with no tokens at
/// all (consecutive `;;`) still appear, holding just their terminator.
pub fn statement_token_ranges(tokens: &[Token]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for (index, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Semicolon {
            ranges.push(start..index + 1);
            start = index + 1;
        }
    }
    let end = tokens
        .len()
        .saturating_sub(usize::from(tokens.last().is_some_and(|t| t.kind == TokenKind::Eof)));
    if start < end {
        ranges.push(start..end);
    }
    ranges
}
