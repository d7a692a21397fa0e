// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Rule-to-entity mapping
//!
//! Classifies grammar rules into [`EntityContextType`]s through an
//! explicit lookup table. The table must cover every rule a collector is
//! configured to prefer - a preferred rule without an entry would make its
//! candidates vanish silently at request time, so coverage is checked once
//! at construction instead ([`EntityRuleTable::ensure_covers`]).

use rustc_hash::{FxHashMap, FxHashSet};

use caretql_grammar::RuleId;

use crate::entity::EntityContextType;
use crate::error::ConfigError;

/// Lookup table from grammar rule to semantic category.
#[derive(Debug, Clone, Default)]
pub struct EntityRuleTable {
    entries: FxHashMap<RuleId, EntityContextType>,
}

impl EntityRuleTable {
    pub fn new(entries: FxHashMap<RuleId, EntityContextType>) -> Self {
        Self { entries }
    }

    /// The table for the Impala-flavored dialect: each name-slot rule maps
    /// to its category, creation slots and reference slots independently.
    pub fn impala() -> Self {
        let entries = [
            (RuleId::FunctionNameCreate, EntityContextType::FunctionCreate),
            (RuleId::TableNameCreate, EntityContextType::TableCreate),
            (RuleId::DatabaseNameCreate, EntityContextType::DatabaseCreate),
            (RuleId::ViewNameCreate, EntityContextType::ViewCreate),
            (RuleId::ColumnNameCreate, EntityContextType::ColumnCreate),
            (RuleId::DatabaseNamePath, EntityContextType::Database),
            (RuleId::TableNamePath, EntityContextType::Table),
            (RuleId::ViewNamePath, EntityContextType::View),
            (RuleId::FunctionNamePath, EntityContextType::Function),
            (RuleId::ColumnNamePath, EntityContextType::Column),
        ]
        .into_iter()
        .collect();
        Self { entries }
    }

    /// Classify one rule. `None` means the rule carries no entity
    /// semantics and its candidates are dropped.
    pub fn classify(&self, rule: RuleId) -> Option<EntityContextType> {
        self.entries.get(&rule).copied()
    }

    pub fn contains(&self, rule: RuleId) -> bool {
        self.entries.contains_key(&rule)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Verify the table covers every rule in `preferred`. Called at engine
    /// construction; a miss here is a dialect misconfiguration.
    pub fn ensure_covers(&self, preferred: &FxHashSet<RuleId>) -> Result<(), ConfigError> {
        for rule in preferred {
            if !self.entries.contains_key(rule) {
                return Err(ConfigError::UnmappedPreferredRule(*rule));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impala_table_covers_all_name_slots() {
        let table = EntityRuleTable::impala();
        assert_eq!(table.len(), 10);
        assert_eq!(
            table.classify(RuleId::TableNameCreate),
            Some(EntityContextType::TableCreate)
        );
        assert_eq!(
            table.classify(RuleId::TableNamePath),
            Some(EntityContextType::Table)
        );
        assert_eq!(
            table.classify(RuleId::ColumnNamePath),
            Some(EntityContextType::Column)
        );
    }

    #[test]
    fn test_structural_rules_are_unclassified() {
        let table = EntityRuleTable::impala();
        assert_eq!(table.classify(RuleId::SelectStatement), None);
        assert_eq!(table.classify(RuleId::Expression), None);
    }

    #[test]
    fn test_ensure_covers_accepts_mapped_set() {
        let table = EntityRuleTable::impala();
        let preferred: FxHashSet<RuleId> =
            [RuleId::TableNamePath, RuleId::ColumnNameCreate].into_iter().collect();
        assert!(table.ensure_covers(&preferred).is_ok());
    }

    #[test]
    fn test_ensure_covers_rejects_unmapped_rule() {
        let table = EntityRuleTable::impala();
        let preferred: FxHashSet<RuleId> = [RuleId::SelectStatement].into_iter().collect();
        let err = table.ensure_covers(&preferred);
        assert_eq!(
            err,
            Err(ConfigError::UnmappedPreferredRule(RuleId::SelectStatement))
        );
    }

    #[test]
    fn test_creation_and_reference_split() {
        let table = EntityRuleTable::impala();
        for (rule, creation) in [
            (RuleId::TableNameCreate, true),
            (RuleId::ViewNameCreate, true),
            (RuleId::TableNamePath, false),
            (RuleId::FunctionNamePath, false),
        ] {
            let context = table.classify(rule);
            assert_eq!(context.map(|c| c.is_creation()), Some(creation));
        }
    }
}
