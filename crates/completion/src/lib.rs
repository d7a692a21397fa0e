// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # CaretQL - Completion Engine
//!
//! Typed SQL completion suggestions at a caret position.
//!
//! ## Overview
//!
//! Given source text and a byte offset, [`CompletionEngine::suggestions_at`]
//! answers what a user could legally type there: name slots labelled with
//! their semantic category ([`caretql_context::EntityContextType`]) plus
//! plain keyword continuations. The engine works against a best-effort
//! tolerant parse, so mid-edit and outright broken statements still
//! produce useful answers.
//!
//! ## Examples
//!
//! ```
//! use caretql_completion::CompletionEngine;
//!
//! let engine = CompletionEngine::impala();
//! let text = "SELECT * FROM ";
//! let suggestions = engine.suggestions_at(text, text.len());
//! assert_eq!(suggestions.syntax.len(), 1);
//! ```
//!
//! ## Pipeline
//!
//! text + caret → statement splitting → tolerant parse → reachability at
//! the caret token → rule classification + keyword filtering → public
//! [`caretql_context::Suggestions`]. Everything runs synchronously inside
//! the call; one engine value serves concurrent requests without locking.

pub mod config;
pub mod engine;
pub mod splitter;

// Re-export commonly used types
pub use caretql_context::{EntityContextType, Suggestions, SyntaxSuggestion};
pub use caretql_grammar::{SyntaxError, Token, TokenKind};
pub use config::CompletionConfig;
pub use engine::CompletionEngine;
pub use splitter::{StatementSlice, split, statement_token_ranges};
