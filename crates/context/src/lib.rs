// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # CaretQL - Context Layer
//!
//! Turns raw reachability output into IDE-consumable suggestions.
//!
//! ## Overview
//!
//! The grammar layer reports *which grammar rules and terminals* are
//! reachable at a caret. This crate knows what those rules *mean*:
//!
//! - [`entity::EntityContextType`] - the closed set of semantic
//!   categories, split into creation and reference variants.
//! - [`mapper::EntityRuleTable`] - the dialect's rule→category table,
//!   validated at construction against the preferred-rules configuration.
//! - [`keywords`] - reserved-word extraction from terminal candidates.
//! - [`suggestion::assemble`] - index translation, word-range cutting and
//!   final [`suggestion::Suggestions`] assembly.
//!
//! All types here are per-request values; nothing is cached or shared
//! between completion calls except the immutable [`mapper::EntityRuleTable`].

pub mod entity;
pub mod error;
pub mod keywords;
pub mod mapper;
pub mod suggestion;

// Re-export commonly used types
pub use entity::EntityContextType;
pub use error::{ConfigError, ConfigResult};
pub use keywords::{keyword_suggestions, keyword_text};
pub use mapper::EntityRuleTable;
pub use suggestion::{SyntaxSuggestion, Suggestions, assemble};
