// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion engine
//!
//! The public pipeline: tokenize, clamp the caret, locate the statement
//! under it, run the tolerant parse, query reachability at the caret
//! token, and assemble typed suggestions.
//!
//! One engine serves many requests. Requests are fully synchronous and
//! share nothing but the engine's immutable grammar and configuration, so
//! a single engine value is safe behind an `Arc` across editor sessions.
//! Malformed input text can never fail a request; the worst case is an
//! empty suggestion set.

use std::ops::Range;
use std::sync::Arc;

use tracing::debug;

use caretql_context::{ConfigResult, Suggestions, assemble};
use caretql_grammar::{
    CollectingErrorListener, Grammar, ParseSession, SyntaxError, TokenStream,
};

use crate::config::CompletionConfig;
use crate::splitter::{split, statement_token_ranges};

/// Resolves completion suggestions for one dialect.
pub struct CompletionEngine {
    grammar: Arc<Grammar>,
    config: CompletionConfig,
}

impl CompletionEngine {
    /// Engine for the Impala-flavored dialect.
    pub fn impala() -> Self {
        Self {
            grammar: Arc::new(Grammar::impala()),
            config: CompletionConfig::impala(),
        }
    }

    /// Engine over an injected grammar and configuration. Fails only on
    /// dialect misconfiguration; validate once at startup, not per
    /// request.
    pub fn with_config(grammar: Arc<Grammar>, config: CompletionConfig) -> ConfigResult<Self> {
        config.validate(&grammar)?;
        Ok(Self { grammar, config })
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Suggestions for the caret at `caret_offset` (a byte offset into
    /// `text`, clamped to its end when out of range).
    pub fn suggestions_at(&self, text: &str, caret_offset: usize) -> Suggestions {
        let stream = TokenStream::tokenize(text);
        let caret_index = stream.caret_token_index(caret_offset);
        let slice = split(stream.tokens(), caret_index);
        let local_tokens = &stream.tokens()[slice.range.clone()];
        let local_caret = caret_index - slice.token_index_offset;

        let session = ParseSession::new(&self.grammar, local_tokens);
        let mut listener = CollectingErrorListener::new();
        let outcome = session.parse(&mut listener);
        debug!(
            caret_index,
            statement_start = slice.token_index_offset,
            matched = outcome.matched,
            errors = outcome.errors.len(),
            "resolved caret statement"
        );

        let collection = session.candidates_at(local_caret, &self.config.collector);
        assemble(
            &collection,
            stream.tokens(),
            local_caret,
            slice.token_index_offset,
            &self.config.entity_table,
        )
    }

    /// Tolerant-parse every statement and return the collected syntax
    /// errors, token indices translated to the original stream.
    pub fn validate(&self, text: &str) -> Vec<SyntaxError> {
        let stream = TokenStream::tokenize(text);
        let mut errors = Vec::new();
        for range in statement_token_ranges(stream.tokens()) {
            let offset = range.start;
            let session = ParseSession::new(&self.grammar, &stream.tokens()[range]);
            let mut listener = CollectingErrorListener::new();
            let outcome = session.parse(&mut listener);
            errors.extend(outcome.errors.into_iter().map(|mut error| {
                error.token_index += offset;
                error
            }));
        }
        errors
    }

    /// Byte spans of the individual statements in `text`, terminators
    /// included.
    pub fn split_statements(&self, text: &str) -> Vec<Range<usize>> {
        let stream = TokenStream::tokenize(text);
        statement_token_ranges(stream.tokens())
            .into_iter()
            .filter_map(|range| {
                let tokens = &stream.tokens()[range];
                let first = tokens.first()?;
                let last = tokens.last()?;
                Some(first.span.start..last.span.end)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompletionEngine>();
    }

    #[test]
    fn test_with_config_accepts_the_impala_defaults() {
        let engine =
            CompletionEngine::with_config(Arc::new(Grammar::impala()), CompletionConfig::impala());
        assert!(engine.is_ok());
    }

    #[test]
    fn test_with_config_rejects_unmapped_preferred_rule() {
        use caretql_grammar::RuleId;

        let mut config = CompletionConfig::impala();
        config.collector.preferred_rules.insert(RuleId::Expression);
        let result = CompletionEngine::with_config(Arc::new(Grammar::impala()), config);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_statements() {
        let engine = CompletionEngine::impala();
        assert!(engine.validate("SELECT id FROM users; USE analytics;").is_empty());
    }

    #[test]
    fn test_validate_reports_per_statement_errors() {
        let engine = CompletionEngine::impala();
        let errors = engine.validate("SELECT * FROM; SELECT 1");
        assert_eq!(errors.len(), 1);
        // Token index is translated into the unsplit stream.
        assert_eq!(errors[0].token_index, 3);
    }

    #[test]
    fn test_split_statements_reports_byte_spans() {
        let engine = CompletionEngine::impala();
        let text = "SELECT 1; USE db";
        let spans = engine.split_statements(text);
        assert_eq!(spans.len(), 2);
        assert_eq!(&text[spans[0].clone()], "SELECT 1;");
        assert_eq!(&text[spans[1].clone()], "USE db");
    }
}
