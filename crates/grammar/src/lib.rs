// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # CaretQL - Grammar Layer
//!
//! This crate provides the language-level building blocks of the CaretQL
//! completion engine: the token vocabulary and lexer, the dialect grammar
//! tables, an error-tolerant parse session, and the reachability collector
//! that enumerates what could legally appear at a token index.
//!
//! ## Overview
//!
//! The crate is deliberately free of completion semantics. It answers two
//! questions about a token slice:
//!
//! 1. *Does this parse, and if not, where and why did it stop?* -
//!    [`session::ParseSession`]
//! 2. *What rules and terminals are reachable at this token index?* -
//!    [`collect::CandidateCollector`]
//!
//! Turning those raw answers into typed suggestions is the job of the
//! `caretql-context` crate.
//!
//! ## Tolerance
//!
//! Completion runs against text that is usually mid-edit, so nothing in
//! this crate fails on malformed input: the lexer degrades unrecognized
//! bytes to [`token::TokenKind::Unknown`], and the parse session reports
//! syntax errors through an [`error::ErrorListener`] instead of returning
//! them.

pub mod collect;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod rules;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use collect::{
    CandidateCollection, CandidateCollector, CollectorConfig, RuleCandidate, TokenCandidate,
};
pub use error::{CollectingErrorListener, ErrorListener, SyntaxError};
pub use grammar::{Grammar, Sym};
pub use lexer::{Token, TokenStream};
pub use rules::RuleId;
pub use session::{ParseOutcome, ParseSession};
pub use token::{TokenCategory, TokenKind};
