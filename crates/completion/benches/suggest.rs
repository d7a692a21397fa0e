// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! End-to-end suggestion pipeline benchmarks
//!
//! Measures the full flow: tokenize, split, tolerant parse, reachability
//! and assembly for carets in representative statement shapes.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use caretql_completion::CompletionEngine;

fn bench_suggestions_by_context(c: &mut Criterion) {
    let engine = CompletionEngine::impala();
    let cases = [
        ("from_clause", "SELECT * FROM "),
        ("create_table_name", "CREATE TABLE "),
        ("create_table_columns", "CREATE TABLE t (id INT, name STRING, "),
        ("projection", "SELECT "),
        (
            "where_clause",
            "SELECT id, name FROM users u JOIN orders o ON u.id = o.user_id WHERE ",
        ),
        ("multi_statement", "USE analytics; SELECT 1; SELECT * FROM "),
    ];

    for (name, text) in cases {
        c.bench_function(&format!("suggest/{name}"), |b| {
            b.iter(|| {
                let suggestions = engine.suggestions_at(black_box(text), text.len());
                black_box(suggestions);
            });
        });
    }
}

fn bench_engine_construction(c: &mut Criterion) {
    c.bench_function("suggest/engine_construction", |b| {
        b.iter(|| {
            let engine = CompletionEngine::impala();
            black_box(engine);
        });
    });
}

criterion_group!(benches, bench_suggestions_by_context, bench_engine_construction);
criterion_main!(benches);
