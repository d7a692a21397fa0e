// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Configuration error types.

use thiserror::Error;

use caretql_grammar::RuleId;

/// Result type alias for configuration validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Dialect misconfiguration, detectable only at construction time.
///
/// Request-time inputs never produce these; malformed text degrades to an
/// empty suggestion set instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A preferred rule has no entry in the entity table, so its
    /// candidates would silently vanish at request time.
    #[error("preferred rule {0:?} has no entity mapping")]
    UnmappedPreferredRule(RuleId),

    /// A configured rule does not exist in the grammar.
    #[error("rule {0:?} is not defined in the grammar")]
    UnknownRule(RuleId),
}
