// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Syntax diagnostics produced by the tolerant parse.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::TokenKind;

/// A recoverable syntax error observed while matching a statement.
///
/// `token_index` is relative to the token slice the session was driven
/// over; `span` is a byte range into the original source text.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("syntax error at byte {}: unexpected {found:?}", .span.start)]
pub struct SyntaxError {
    pub token_index: usize,
    pub span: Range<usize>,
    pub found: TokenKind,
    /// Terminals that would have been accepted at this position, in
    /// discovery order.
    pub expected: Vec<TokenKind>,
}

/// Receives syntax errors during a tolerant parse.
///
/// The session forwards every recoverable error here and keeps going;
/// listeners never get the chance to abort the walk.
pub trait ErrorListener {
    fn syntax_error(&mut self, error: &SyntaxError);
}

/// Listener that simply accumulates everything it is given.
#[derive(Debug, Default)]
pub struct CollectingErrorListener {
    errors: Vec<SyntaxError>,
}

impl CollectingErrorListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }
}

impl ErrorListener for CollectingErrorListener {
    fn syntax_error(&mut self, error: &SyntaxError) {
        self.errors.push(error.clone());
    }
}
