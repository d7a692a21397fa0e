// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect configuration
//!
//! The immutable, dialect-fixed configuration a [`crate::CompletionEngine`]
//! is built from: which rules the reachability collector reports
//! (preferred), which it refuses to enter (ignored), and how preferred
//! rules map to entity categories. Built once, then shared read-only by
//! every concurrent request.

use rustc_hash::FxHashSet;

use caretql_context::{ConfigError, ConfigResult, EntityRuleTable};
use caretql_grammar::{CollectorConfig, Grammar, RuleId};

/// Everything dialect-specific about suggestion resolution.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub collector: CollectorConfig,
    pub entity_table: EntityRuleTable,
}

impl CompletionConfig {
    /// Configuration for the Impala-flavored dialect: the ten name-slot
    /// rules are preferred, nothing is ignored, and the entity table
    /// covers exactly those ten rules.
    pub fn impala() -> Self {
        let preferred_rules: FxHashSet<RuleId> = [
            RuleId::FunctionNameCreate,
            RuleId::TableNameCreate,
            RuleId::ViewNameCreate,
            RuleId::DatabaseNameCreate,
            RuleId::ColumnNameCreate,
            RuleId::TableNamePath,
            RuleId::FunctionNamePath,
            RuleId::ViewNamePath,
            RuleId::DatabaseNamePath,
            RuleId::ColumnNamePath,
        ]
        .into_iter()
        .collect();
        Self {
            collector: CollectorConfig {
                preferred_rules,
                ignored_rules: FxHashSet::default(),
            },
            entity_table: EntityRuleTable::impala(),
        }
    }

    /// Check this configuration against a grammar. Every configured rule
    /// must exist and every preferred rule must be classifiable.
    pub fn validate(&self, grammar: &Grammar) -> ConfigResult<()> {
        self.entity_table
            .ensure_covers(&self.collector.preferred_rules)?;
        for rule in self
            .collector
            .preferred_rules
            .iter()
            .chain(self.collector.ignored_rules.iter())
        {
            if !grammar.contains(*rule) {
                return Err(ConfigError::UnknownRule(*rule));
            }
        }
        Ok(())
    }
}
