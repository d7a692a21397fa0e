// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Reachability collector integration tests
//!
//! These tests drive the collector over lexed SQL fragments and verify
//! which rules and terminals it reports at the caret token.

use caretql_grammar::{
    CandidateCollection, CandidateCollector, CollectorConfig, Grammar, RuleId, TokenKind,
    TokenStream,
};
use rustc_hash::FxHashSet;

fn name_slot_config() -> CollectorConfig {
    let preferred: FxHashSet<RuleId> = [
        RuleId::TableNameCreate,
        RuleId::ViewNameCreate,
        RuleId::DatabaseNameCreate,
        RuleId::FunctionNameCreate,
        RuleId::ColumnNameCreate,
        RuleId::TableNamePath,
        RuleId::ViewNamePath,
        RuleId::DatabaseNamePath,
        RuleId::FunctionNamePath,
        RuleId::ColumnNamePath,
    ]
    .into_iter()
    .collect();
    CollectorConfig {
        preferred_rules: preferred,
        ignored_rules: FxHashSet::default(),
    }
}

/// Collect at the Eof token of `text`.
fn collect_at_end(text: &str) -> CandidateCollection {
    collect_with(text, &name_slot_config())
}

fn collect_with(text: &str, config: &CollectorConfig) -> CandidateCollection {
    let grammar = Grammar::impala();
    let stream = TokenStream::tokenize(text);
    let caret = stream.len() - 1;
    CandidateCollector::new(&grammar, config).collect(stream.tokens(), caret)
}

fn rule_ids(collection: &CandidateCollection) -> Vec<RuleId> {
    collection.rules.iter().map(|c| c.rule).collect()
}

fn token_kinds(collection: &CandidateCollection) -> Vec<TokenKind> {
    collection.tokens.iter().map(|c| c.kind).collect()
}

#[test]
fn test_from_clause_expects_table_reference() {
    let collection = collect_at_end("SELECT * FROM ");
    assert_eq!(rule_ids(&collection), vec![RuleId::TableNamePath]);
    let candidate = collection.rules[0];
    // Entered exactly at the caret token.
    assert_eq!(candidate.start_token_index, 3);
}

#[test]
fn test_create_table_expects_creation_slot() {
    let collection = collect_at_end("CREATE TABLE ");
    assert_eq!(rule_ids(&collection), vec![RuleId::TableNameCreate]);
}

#[test]
fn test_after_create_expects_object_keywords() {
    let collection = collect_at_end("CREATE ");
    assert!(collection.rules.is_empty());
    let kinds = token_kinds(&collection);
    for kind in [
        TokenKind::KwTable,
        TokenKind::KwView,
        TokenKind::KwDatabase,
        TokenKind::KwFunction,
        TokenKind::KwSchema,
        TokenKind::KwExternal,
        TokenKind::KwAggregate,
    ] {
        assert!(kinds.contains(&kind), "missing {kind:?} in {kinds:?}");
    }
}

#[test]
fn test_qualified_path_anchors_at_first_segment() {
    // The word range of a dotted path starts at its first identifier.
    let collection = collect_at_end("SELECT * FROM analytics.");
    assert_eq!(rule_ids(&collection), vec![RuleId::TableNamePath]);
    assert_eq!(collection.rules[0].start_token_index, 3);
}

#[test]
fn test_select_projection_is_ambiguous_between_column_and_function() {
    let collection = collect_at_end("SELECT ");
    let rules = rule_ids(&collection);
    assert!(rules.contains(&RuleId::ColumnNamePath));
    assert!(rules.contains(&RuleId::FunctionNamePath));
    // Keyword continuations are reported alongside the name slots.
    let kinds = token_kinds(&collection);
    assert!(kinds.contains(&TokenKind::KwDistinct));
    assert!(kinds.contains(&TokenKind::KwCase));
}

#[test]
fn test_drop_view_expects_view_reference() {
    let collection = collect_at_end("DROP VIEW ");
    let rules = rule_ids(&collection);
    assert_eq!(rules, vec![RuleId::ViewNamePath]);
}

#[test]
fn test_use_expects_database_reference() {
    let collection = collect_at_end("USE ");
    assert_eq!(rule_ids(&collection), vec![RuleId::DatabaseNamePath]);
}

#[test]
fn test_insert_into_expects_table_reference() {
    let collection = collect_at_end("INSERT INTO ");
    let rules = rule_ids(&collection);
    assert!(rules.contains(&RuleId::TableNamePath));
    // INTO may also be followed by the optional TABLE keyword.
    assert!(token_kinds(&collection).contains(&TokenKind::KwTable));
}

#[test]
fn test_create_table_columns_expect_creation_column() {
    let collection = collect_at_end("CREATE TABLE t (");
    assert_eq!(rule_ids(&collection), vec![RuleId::ColumnNameCreate]);
}

#[test]
fn test_candidates_are_deduplicated() {
    let collection = collect_at_end("SELECT ");
    let mut seen = FxHashSet::default();
    for candidate in &collection.rules {
        assert!(seen.insert((candidate.rule, candidate.start_token_index)));
    }
    let mut kinds = FxHashSet::default();
    for candidate in &collection.tokens {
        assert!(kinds.insert(candidate.kind));
    }
}

#[test]
fn test_start_index_never_exceeds_caret() {
    for text in [
        "SELECT * FROM ",
        "SELECT id, ",
        "CREATE TABLE t (id INT, ",
        "SELECT * FROM a JOIN ",
        "UPDATE t SET ",
    ] {
        let collection = collect_at_end(text);
        let caret = TokenStream::tokenize(text).len() - 1;
        for candidate in &collection.rules {
            assert!(candidate.start_token_index <= caret, "in {text:?}");
        }
    }
}

#[test]
fn test_ignored_rules_prune_the_search() {
    let mut config = name_slot_config();
    config.ignored_rules.insert(RuleId::Expression);
    let collection = collect_with("SELECT ", &config);
    // With expressions pruned, only the star remains reachable in the
    // select list.
    assert!(rule_ids(&collection).is_empty());
    assert!(token_kinds(&collection).contains(&TokenKind::Star));
}

#[test]
fn test_where_clause_expects_column_and_function() {
    let collection = collect_at_end("SELECT * FROM t WHERE ");
    let rules = rule_ids(&collection);
    assert!(rules.contains(&RuleId::ColumnNamePath));
    assert!(rules.contains(&RuleId::FunctionNamePath));
    assert!(token_kinds(&collection).contains(&TokenKind::KwNot));
}

#[test]
fn test_mid_statement_caret_ignores_following_tokens() {
    let grammar = Grammar::impala();
    let stream = TokenStream::tokenize("SELECT  FROM users");
    // Caret between SELECT and FROM: index of the FROM token.
    let collector_config = name_slot_config();
    let collection =
        CandidateCollector::new(&grammar, &collector_config).collect(stream.tokens(), 1);
    let rules = rule_ids(&collection);
    assert!(rules.contains(&RuleId::ColumnNamePath));
}
