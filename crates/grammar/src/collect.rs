// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Reachability collector
//!
//! Enumerates the grammar rules and terminal tokens that could legally
//! appear at a target token index, given the tokens before it. The walk
//! simulates every derivation of the entry rule over the token prefix;
//! when it reaches the target index it records what the grammar expects
//! there instead of consuming further.
//!
//! Preferred rules short-circuit the walk: a terminal expected at the
//! target while a preferred rule is on the walk stack is reported as that
//! rule (innermost preferred rule wins), carrying the token index where
//! the rule was entered. A preferred rule entered exactly at the target is
//! reported without descending into it. Everything else surfaces as plain
//! token candidates.
//!
//! Candidates are deduplicated and kept in discovery order, which is
//! deterministic (alternative order in the grammar tables).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::grammar::{Grammar, Sym};
use crate::lexer::Token;
use crate::rules::RuleId;
use crate::token::TokenKind;

/// Walk-step ceiling per collection; pathological input stops early with
/// whatever was found.
const STEP_BUDGET: usize = 200_000;

/// A grammar rule reachable at the target index.
///
/// `start_token_index` is relative to the token slice the collector was
/// run over, and never exceeds the target index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCandidate {
    pub rule: RuleId,
    pub start_token_index: usize,
}

/// A terminal token kind reachable at the target index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCandidate {
    pub kind: TokenKind,
}

/// Everything reachable at one token index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCollection {
    pub rules: Vec<RuleCandidate>,
    pub tokens: Vec<TokenCandidate>,
}

/// Which rules the collector reports and which it refuses to enter.
#[derive(Debug, Clone, Default)]
pub struct CollectorConfig {
    pub preferred_rules: FxHashSet<RuleId>,
    pub ignored_rules: FxHashSet<RuleId>,
}

/// Reachability query over one grammar.
pub struct CandidateCollector<'a> {
    grammar: &'a Grammar,
    config: &'a CollectorConfig,
}

struct Walk<'t> {
    tokens: &'t [Token],
    caret: usize,
    /// Rules currently entered, with their entry token index.
    stack: Vec<(RuleId, usize)>,
    /// (rule, position) pairs currently being expanded; guards cycles.
    active: FxHashSet<(RuleId, usize)>,
    steps: usize,
    exhausted: bool,
    rules: Vec<RuleCandidate>,
    rule_seen: FxHashSet<(RuleId, usize)>,
    token_out: Vec<TokenCandidate>,
    token_seen: FxHashSet<TokenKind>,
}

impl<'a> CandidateCollector<'a> {
    pub fn new(grammar: &'a Grammar, config: &'a CollectorConfig) -> Self {
        Self { grammar, config }
    }

    /// Collect rule and token candidates at `caret_index` within `tokens`.
    ///
    /// Tokens at and after the caret index are never consumed; the walk
    /// only matches the prefix before it.
    pub fn collect(&self, tokens: &[Token], caret_index: usize) -> CandidateCollection {
        let mut walk = Walk {
            tokens,
            caret: caret_index,
            stack: Vec::new(),
            active: FxHashSet::default(),
            steps: 0,
            exhausted: false,
            rules: Vec::new(),
            rule_seen: FxHashSet::default(),
            token_out: Vec::new(),
            token_seen: FxHashSet::default(),
        };
        self.walk_rule(self.grammar.start_rule(), 0, &mut walk);
        if walk.exhausted {
            warn!(
                caret_index,
                budget = STEP_BUDGET,
                "candidate walk budget exhausted; returning partial results"
            );
        }
        CandidateCollection {
            rules: walk.rules,
            tokens: walk.token_out,
        }
    }

    fn walk_rule(&self, rule: RuleId, pos: usize, walk: &mut Walk<'_>) -> Vec<usize> {
        if walk.exhausted {
            return Vec::new();
        }
        walk.steps += 1;
        if walk.steps > STEP_BUDGET {
            walk.exhausted = true;
            return Vec::new();
        }
        if self.config.ignored_rules.contains(&rule) {
            return Vec::new();
        }
        if pos == walk.caret && self.config.preferred_rules.contains(&rule) {
            record_rule(walk, rule, pos);
            return Vec::new();
        }
        if !walk.active.insert((rule, pos)) {
            return Vec::new();
        }
        let Some(alternatives) = self.grammar.alternatives(rule) else {
            walk.active.remove(&(rule, pos));
            warn!(?rule, "rule referenced but not defined in grammar");
            return Vec::new();
        };
        walk.stack.push((rule, pos));
        let mut ends = Vec::new();
        for alt in alternatives {
            ends.extend(self.walk_seq(alt, pos, walk));
        }
        walk.stack.pop();
        walk.active.remove(&(rule, pos));
        ends.sort_unstable();
        ends.dedup();
        ends
    }

    fn walk_seq(&self, symbols: &[Sym], pos: usize, walk: &mut Walk<'_>) -> Vec<usize> {
        let mut current = vec![pos];
        for sym in symbols {
            let mut next = Vec::new();
            for &p in &current {
                match *sym {
                    Sym::T(kind) => {
                        if p == walk.caret {
                            self.record_terminal(walk, kind);
                        } else if walk.tokens.get(p).is_some_and(|t| t.kind == kind) {
                            next.push(p + 1);
                        }
                    }
                    Sym::R(rule) => next.extend(self.walk_rule(rule, p, walk)),
                }
            }
            next.sort_unstable();
            next.dedup();
            current = next;
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// A terminal expected at the target surfaces as the innermost
    /// preferred rule on the stack, anchored at that rule's entry token;
    /// with no preferred rule active it surfaces as a token candidate.
    fn record_terminal(&self, walk: &mut Walk<'_>, kind: TokenKind) {
        let preferred = walk
            .stack
            .iter()
            .rev()
            .find(|(rule, _)| self.config.preferred_rules.contains(rule))
            .copied();
        match preferred {
            Some((rule, start)) => record_rule(walk, rule, start),
            None => {
                if walk.token_seen.insert(kind) {
                    walk.token_out.push(TokenCandidate { kind });
                }
            }
        }
    }
}

fn record_rule(walk: &mut Walk<'_>, rule: RuleId, start: usize) {
    if walk.rule_seen.insert((rule, start)) {
        walk.rules.push(RuleCandidate {
            rule,
            start_token_index: start,
        });
    }
}
