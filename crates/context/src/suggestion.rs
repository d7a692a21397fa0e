// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Suggestion assembly
//!
//! Combines classified rule candidates and filtered keyword candidates
//! into the public [`Suggestions`] value. Rule candidate indices arrive
//! relative to the sub-statement slice the collector ran over; the
//! assembler translates them back into the original token stream through
//! the splitter's index offset before cutting word ranges.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use caretql_grammar::{CandidateCollection, Token};

use crate::entity::EntityContextType;
use crate::keywords::keyword_suggestions;
use crate::mapper::EntityRuleTable;

/// One typed completion suggestion.
///
/// `word_range` spans from the candidate rule's start token through the
/// caret token inclusive - the tokens a replacement edit would cover. It
/// is never empty; at minimum it holds the caret token itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxSuggestion {
    pub context_type: EntityContextType,
    pub word_range: Vec<Token>,
}

/// Everything the engine has to say about one caret position.
///
/// `syntax` follows the collector's rule-candidate order and `keywords`
/// its token-candidate order. Nothing here is deduplicated, ranked or
/// truncated; that is the caller's business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub syntax: Vec<SyntaxSuggestion>,
    pub keywords: Vec<String>,
}

/// Build [`Suggestions`] from a raw candidate collection.
///
/// `tokens` is the original, unsplit token stream; `caret_token_index` is
/// local to the collected slice and `token_index_offset` translates local
/// indices back into `tokens`. Candidates whose rule has no entity mapping
/// are dropped silently; a candidate whose translated start would lie past
/// the caret is dropped defensively - an inverted range would corrupt the
/// caller's replacement edit.
pub fn assemble(
    collection: &CandidateCollection,
    tokens: &[Token],
    caret_token_index: usize,
    token_index_offset: usize,
    table: &EntityRuleTable,
) -> Suggestions {
    let caret_global = caret_token_index + token_index_offset;
    let mut syntax = Vec::new();
    for candidate in &collection.rules {
        let start_global = candidate.start_token_index + token_index_offset;
        if start_global > caret_global {
            warn!(
                rule = ?candidate.rule,
                start_global,
                caret_global,
                "dropping candidate with inverted token range"
            );
            continue;
        }
        let Some(context_type) = table.classify(candidate.rule) else {
            debug!(rule = ?candidate.rule, "candidate rule has no entity mapping");
            continue;
        };
        let Some(word_range) = tokens.get(start_global..=caret_global) else {
            warn!(
                start_global,
                caret_global,
                stream_len = tokens.len(),
                "candidate range does not fit the token stream"
            );
            continue;
        };
        syntax.push(SyntaxSuggestion {
            context_type,
            word_range: word_range.to_vec(),
        });
    }
    Suggestions {
        syntax,
        keywords: keyword_suggestions(&collection.tokens),
    }
}
