// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Completion integration tests
//!
//! End-to-end tests of the suggestion pipeline: raw text plus a caret
//! offset in, typed suggestions out.

use caretql_completion::{CompletionEngine, EntityContextType, Suggestions};

fn suggest_at_end(text: &str) -> Suggestions {
    CompletionEngine::impala().suggestions_at(text, text.len())
}

fn context_types(suggestions: &Suggestions) -> Vec<EntityContextType> {
    suggestions.syntax.iter().map(|s| s.context_type).collect()
}

#[test]
fn test_create_table_suggests_creation_slot() {
    let suggestions = suggest_at_end("CREATE TABLE ");
    assert_eq!(
        context_types(&suggestions),
        vec![EntityContextType::TableCreate]
    );
    // The word range holds at least the caret token.
    assert!(!suggestions.syntax[0].word_range.is_empty());
}

#[test]
fn test_from_clause_suggests_table_reference() {
    let suggestions = suggest_at_end("SELECT * FROM ");
    assert_eq!(context_types(&suggestions), vec![EntityContextType::Table]);
}

#[test]
fn test_after_create_suggests_object_keywords_only() {
    let suggestions = suggest_at_end("CREATE ");
    assert!(suggestions.syntax.is_empty());
    for keyword in ["TABLE", "VIEW", "DATABASE", "FUNCTION"] {
        assert!(
            suggestions.keywords.iter().any(|k| k == keyword),
            "missing {keyword} in {:?}",
            suggestions.keywords
        );
    }
}

#[test]
fn test_out_of_range_caret_clamps_to_end() {
    let text = "SELECT * FROM ";
    let engine = CompletionEngine::impala();
    let at_end = engine.suggestions_at(text, text.len());
    let beyond = engine.suggestions_at(text, text.len() + 10_000);
    assert_eq!(at_end, beyond);
}

#[test]
fn test_identical_requests_are_idempotent() {
    let engine = CompletionEngine::impala();
    let text = "SELECT id, FROM users";
    let first = engine.suggestions_at(text, 10);
    let second = engine.suggestions_at(text, 10);
    assert_eq!(first, second);
}

#[test]
fn test_multi_statement_offsets_resolve_into_second_statement() {
    // The second statement starts at byte 10; every word-range token of a
    // suggestion computed there must point past it.
    let text = "SELECT 1; CREATE TABLE t (";
    let suggestions = suggest_at_end(text);
    assert!(!suggestions.syntax.is_empty());
    for suggestion in &suggestions.syntax {
        for token in &suggestion.word_range {
            assert!(
                token.span.start >= 10,
                "token {token:?} resolves into the first statement"
            );
        }
    }
}

#[test]
fn test_multi_statement_word_range_text() {
    let text = "SELECT 1; CREATE TABLE tbl";
    let suggestions = suggest_at_end(text);
    assert_eq!(
        context_types(&suggestions),
        vec![EntityContextType::TableCreate]
    );
    let words: Vec<_> = suggestions.syntax[0]
        .word_range
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(words, vec!["tbl"]);
}

#[test]
fn test_caret_in_first_statement_is_unaffected_by_later_ones() {
    let engine = CompletionEngine::impala();
    // Caret right after "FROM " in the first statement.
    let suggestions = engine.suggestions_at("SELECT * FROM ; USE db", 14);
    assert_eq!(context_types(&suggestions), vec![EntityContextType::Table]);
}

#[test]
fn test_create_view_suggests_view_creation_slot() {
    let suggestions = suggest_at_end("CREATE VIEW ");
    assert_eq!(
        context_types(&suggestions),
        vec![EntityContextType::ViewCreate]
    );
}

#[test]
fn test_create_table_column_list_suggests_column_creation() {
    let suggestions = suggest_at_end("CREATE TABLE t (");
    assert!(
        context_types(&suggestions).contains(&EntityContextType::TableCreate)
            || context_types(&suggestions).contains(&EntityContextType::ColumnCreate)
    );
    let after_space = suggest_at_end("CREATE TABLE t ( ");
    assert_eq!(
        context_types(&after_space),
        vec![EntityContextType::ColumnCreate]
    );
}

#[test]
fn test_select_projection_suggests_columns_and_functions() {
    let suggestions = suggest_at_end("SELECT ");
    let types = context_types(&suggestions);
    assert!(types.contains(&EntityContextType::Column));
    assert!(types.contains(&EntityContextType::Function));
    assert!(suggestions.keywords.iter().any(|k| k == "DISTINCT"));
}

#[test]
fn test_qualified_table_path_spans_all_segments() {
    let text = "SELECT * FROM analytics.events";
    let suggestions = suggest_at_end(text);
    assert_eq!(context_types(&suggestions), vec![EntityContextType::Table]);
    let words: Vec<_> = suggestions.syntax[0]
        .word_range
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(words, vec!["analytics", ".", "events"]);
}

#[test]
fn test_word_ranges_are_ordered() {
    for text in ["SELECT * FROM db.t", "CREATE TABLE x (a INT, ", "USE "] {
        let suggestions = suggest_at_end(text);
        for suggestion in &suggestions.syntax {
            let first = suggestion.word_range.first();
            let last = suggestion.word_range.last();
            match (first, last) {
                (Some(first), Some(last)) => assert!(first.index <= last.index),
                _ => panic!("empty word range for {text:?}"),
            }
        }
    }
}

#[test]
fn test_keywords_carry_no_quotes() {
    for text in ["", "CREATE ", "SELECT ", "SELECT * FROM t "] {
        let suggestions = suggest_at_end(text);
        for keyword in &suggestions.keywords {
            assert!(!keyword.contains('\''), "quoted keyword {keyword:?}");
        }
    }
}

#[test]
fn test_empty_input_suggests_statement_keywords() {
    let suggestions = suggest_at_end("");
    assert!(suggestions.syntax.is_empty());
    for keyword in ["SELECT", "CREATE", "INSERT", "DROP", "USE", "SHOW", "WITH"] {
        assert!(
            suggestions.keywords.iter().any(|k| k == keyword),
            "missing {keyword}"
        );
    }
}

#[test]
fn test_broken_first_statement_does_not_break_completion() {
    // The first statement is garbage; the caret statement still resolves.
    let text = ") ) (; SELECT * FROM ";
    let suggestions = suggest_at_end(text);
    assert_eq!(context_types(&suggestions), vec![EntityContextType::Table]);
}

#[test]
fn test_drop_and_use_reference_contexts() {
    assert_eq!(
        context_types(&suggest_at_end("DROP TABLE ")),
        vec![EntityContextType::Table]
    );
    assert_eq!(
        context_types(&suggest_at_end("DROP VIEW ")),
        vec![EntityContextType::View]
    );
    assert_eq!(
        context_types(&suggest_at_end("USE ")),
        vec![EntityContextType::Database]
    );
    assert_eq!(
        context_types(&suggest_at_end("DROP FUNCTION ")),
        vec![EntityContextType::Function]
    );
}

#[test]
fn test_insert_into_suggests_table_reference() {
    let suggestions = suggest_at_end("INSERT INTO ");
    assert_eq!(context_types(&suggestions), vec![EntityContextType::Table]);
    assert!(suggestions.keywords.iter().any(|k| k == "TABLE"));
}

#[test]
fn test_partially_typed_name_is_part_of_the_word_range() {
    let text = "SELECT * FROM use";
    let suggestions = suggest_at_end(text);
    assert_eq!(context_types(&suggestions), vec![EntityContextType::Table]);
    let words: Vec<_> = suggestions.syntax[0]
        .word_range
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(words, vec!["use"]);
}

#[test]
fn test_suggestions_round_trip_as_json() {
    let suggestions = suggest_at_end("SELECT * FROM ");
    let json = serde_json::to_string(&suggestions).unwrap();
    let back: Suggestions = serde_json::from_str(&json).unwrap();
    assert_eq!(suggestions, back);
}
