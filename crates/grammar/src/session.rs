// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error-tolerant parse session
//!
//! Drives a best-effort match of the entry rule over a token slice. The
//! session never fails fatally: an unparseable slice yields a diagnostic
//! (forwarded to the [`ErrorListener`]) plus the furthest recognized
//! position, and reachability queries still answer at any token index -
//! worst case against a rule stack rooted at the entry rule alone.
//!
//! The walk matches every derivation of the entry rule, so the reported
//! expected-terminal set at the failure point reflects the whole grammar,
//! not one arbitrary parse attempt.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::collect::{CandidateCollection, CandidateCollector, CollectorConfig};
use crate::error::{ErrorListener, SyntaxError};
use crate::grammar::{Grammar, Sym};
use crate::lexer::Token;
use crate::rules::RuleId;
use crate::token::TokenKind;

const STEP_BUDGET: usize = 400_000;

/// Result of one tolerant parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Whether some derivation consumed the whole slice.
    pub matched: bool,
    /// One past the furthest token any derivation consumed.
    pub furthest_index: usize,
    /// Recoverable syntax errors, also forwarded to the listener.
    pub errors: Vec<SyntaxError>,
}

/// Tolerant parse over one token slice.
pub struct ParseSession<'a> {
    grammar: &'a Grammar,
    tokens: &'a [Token],
}

impl<'a> ParseSession<'a> {
    pub fn new(grammar: &'a Grammar, tokens: &'a [Token]) -> Self {
        Self { grammar, tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens
    }

    /// Match the entry rule against the slice, forwarding any diagnostic
    /// to `listener`. Never panics, never aborts early.
    pub fn parse(&self, listener: &mut dyn ErrorListener) -> ParseOutcome {
        // A trailing Eof sentinel is not part of any derivation.
        let target = match self.tokens.last() {
            Some(t) if t.kind == TokenKind::Eof => self.tokens.len() - 1,
            Some(_) => self.tokens.len(),
            None => 0,
        };
        let mut matcher = Matcher {
            grammar: self.grammar,
            tokens: self.tokens,
            furthest: 0,
            fail_pos: 0,
            expected: Vec::new(),
            memo: FxHashMap::default(),
            active: FxHashSet::default(),
            steps: 0,
        };
        let ends = matcher.match_rule(self.grammar.start_rule(), 0);
        let matched = ends.contains(&target);
        let mut errors = Vec::new();
        if !matched {
            let (found, span) = match self.tokens.get(matcher.fail_pos) {
                Some(token) => (token.kind, token.span.clone()),
                None => {
                    let end = self.tokens.last().map_or(0, |t| t.span.end);
                    (TokenKind::Eof, end..end)
                }
            };
            let error = SyntaxError {
                token_index: matcher.fail_pos,
                span,
                found,
                expected: matcher.expected.clone(),
            };
            debug!(token_index = error.token_index, ?found, "recovered from syntax error");
            listener.syntax_error(&error);
            errors.push(error);
        }
        ParseOutcome {
            matched,
            furthest_index: matcher.furthest,
            errors,
        }
    }

    /// Rule and token candidates reachable at `caret_index`.
    pub fn candidates_at(
        &self,
        caret_index: usize,
        config: &CollectorConfig,
    ) -> CandidateCollection {
        CandidateCollector::new(self.grammar, config).collect(self.tokens, caret_index)
    }

    /// Grammar-rule call stack active at `index`, outermost first. Falls
    /// back to the bare entry rule when no derivation reaches the index.
    pub fn rule_stack_at(&self, index: usize) -> Vec<RuleId> {
        let mut probe = Probe {
            grammar: self.grammar,
            tokens: self.tokens,
            target: index,
            stack: Vec::new(),
            captured: None,
            active: FxHashSet::default(),
            steps: 0,
        };
        probe.probe_rule(self.grammar.start_rule(), 0);
        probe
            .captured
            .unwrap_or_else(|| vec![self.grammar.start_rule()])
    }
}

struct Matcher<'a> {
    grammar: &'a Grammar,
    tokens: &'a [Token],
    furthest: usize,
    fail_pos: usize,
    expected: Vec<TokenKind>,
    memo: FxHashMap<(RuleId, usize), Vec<usize>>,
    active: FxHashSet<(RuleId, usize)>,
    steps: usize,
}

impl Matcher<'_> {
    fn match_rule(&mut self, rule: RuleId, pos: usize) -> Vec<usize> {
        self.steps += 1;
        if self.steps > STEP_BUDGET {
            return Vec::new();
        }
        if let Some(ends) = self.memo.get(&(rule, pos)) {
            return ends.clone();
        }
        if !self.active.insert((rule, pos)) {
            return Vec::new();
        }
        let Some(alternatives) = self.grammar.alternatives(rule) else {
            self.active.remove(&(rule, pos));
            return Vec::new();
        };
        let mut ends = Vec::new();
        for alt in alternatives {
            ends.extend(self.match_seq(alt, pos));
        }
        ends.sort_unstable();
        ends.dedup();
        self.active.remove(&(rule, pos));
        self.memo.insert((rule, pos), ends.clone());
        ends
    }

    fn match_seq(&mut self, symbols: &[Sym], pos: usize) -> Vec<usize> {
        let mut current = vec![pos];
        for sym in symbols {
            let mut next = Vec::new();
            for &p in &current {
                match *sym {
                    Sym::T(kind) => {
                        if self.tokens.get(p).is_some_and(|t| t.kind == kind)
                            && kind != TokenKind::Eof
                        {
                            self.furthest = self.furthest.max(p + 1);
                            next.push(p + 1);
                        } else {
                            self.record_failure(p, kind);
                        }
                    }
                    Sym::R(rule) => next.extend(self.match_rule(rule, p)),
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

    fn record_failure(&mut self, pos: usize, expected: TokenKind) {
        if pos > self.fail_pos {
            self.fail_pos = pos;
            self.expected.clear();
        }
        if pos == self.fail_pos && !self.expected.contains(&expected) {
            self.expected.push(expected);
        }
    }
}

struct Probe<'a> {
    grammar: &'a Grammar,
    tokens: &'a [Token],
    target: usize,
    stack: Vec<RuleId>,
    captured: Option<Vec<RuleId>>,
    active: FxHashSet<(RuleId, usize)>,
    steps: usize,
}

impl Probe<'_> {
    fn probe_rule(&mut self, rule: RuleId, pos: usize) -> Vec<usize> {
        if self.captured.is_some() {
            return Vec::new();
        }
        self.steps += 1;
        if self.steps > STEP_BUDGET {
            return Vec::new();
        }
        if !self.active.insert((rule, pos)) {
            return Vec::new();
        }
        let Some(alternatives) = self.grammar.alternatives(rule) else {
            self.active.remove(&(rule, pos));
            return Vec::new();
        };
        self.stack.push(rule);
        let mut ends = Vec::new();
        for alt in alternatives {
            ends.extend(self.probe_seq(alt, pos));
            if self.captured.is_some() {
                break;
            }
        }
        self.stack.pop();
        self.active.remove(&(rule, pos));
        ends.sort_unstable();
        ends.dedup();
        ends
    }

    fn probe_seq(&mut self, symbols: &[Sym], pos: usize) -> Vec<usize> {
        let mut current = vec![pos];
        for sym in symbols {
            let mut next = Vec::new();
            for &p in &current {
                if self.captured.is_some() {
                    return Vec::new();
                }
                match *sym {
                    Sym::T(kind) => {
                        if self.tokens.get(p).is_some_and(|t| t.kind == kind) {
                            if p == self.target {
                                self.captured = Some(self.stack.clone());
                                return Vec::new();
                            }
                            next.push(p + 1);
                        }
                    }
                    Sym::R(rule) => next.extend(self.probe_rule(rule, p)),
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
}
