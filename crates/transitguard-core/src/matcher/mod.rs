//! Two-phase query matcher over the scripted knowledge base.
//!
//! Phase 1 checks whether any trigger phrase appears as a substring of the
//! lowercased query. Phase 2 falls back to counting how many of a trigger's
//! whitespace tokens appear among the query's tokens. Both phases resolve ties
//! by first entry in curation order; no global best score is computed.

use crate::knowledge::{KnowledgeBase, KnowledgeEntry};
use std::sync::Arc;

/// Minimum number of trigger tokens that must appear in the query for a
/// phase-2 match. Deliberately not tunable.
pub const KEYWORD_OVERLAP_THRESHOLD: usize = 2;

/// Which phase produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// The trigger phrase was a substring of the lowercased query.
    Substring,
    /// At least [`KEYWORD_OVERLAP_THRESHOLD`] trigger tokens appeared in the query.
    KeywordOverlap,
}

/// Outcome of one match attempt. The two cases are distinct variants so callers
/// never have to reason about empty-string or null sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// A knowledge entry qualified; `phase` records how.
    Matched {
        entry: &'a KnowledgeEntry,
        phase: MatchPhase,
    },
    /// No entry qualified. The caller substitutes its own fallback message.
    NoMatch,
}

impl<'a> MatchResult<'a> {
    /// The matched response text, if any.
    pub fn response(&self) -> Option<&'a str> {
        match self {
            MatchResult::Matched { entry, .. } => Some(entry.response),
            MatchResult::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }
}

/// Maps free-form user text to the best-fitting scripted response.
///
/// Pure and synchronous: no I/O, no hidden state, never fails. The base is
/// held behind an `Arc` so matchers can be cloned across tasks cheaply.
#[derive(Clone)]
pub struct QueryMatcher {
    base: Arc<KnowledgeBase>,
}

impl QueryMatcher {
    pub fn new(base: Arc<KnowledgeBase>) -> Self {
        Self { base }
    }

    /// Matcher over the built-in curated table.
    pub fn builtin() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()))
    }

    /// The knowledge base this matcher reads from.
    pub fn base(&self) -> &KnowledgeBase {
        &self.base
    }

    /// Finds the first qualifying entry for `query`, or [`MatchResult::NoMatch`].
    ///
    /// The query is lowercased but not trimmed, and punctuation is not
    /// stripped: "crime?" does not token-match the trigger word "crime" in
    /// phase 2. That brittleness is part of the scripted behavior and is kept
    /// rather than silently fixed.
    pub fn best_match(&self, query: &str) -> MatchResult<'_> {
        let normalized = query.to_lowercase();

        // Phase 1: substring containment, first match in curation order wins.
        // Empty triggers are skipped because every string contains "".
        for entry in self.base.entries() {
            if !entry.trigger.is_empty() && normalized.contains(entry.trigger) {
                tracing::debug!(
                    target: "transitguard::matcher",
                    trigger = entry.trigger,
                    phase = "substring",
                    "query matched trigger '{}' by substring",
                    entry.trigger
                );
                return MatchResult::Matched {
                    entry,
                    phase: MatchPhase::Substring,
                };
            }
        }

        // Phase 2: token overlap, first entry reaching the threshold wins.
        let words: Vec<&str> = normalized.split_whitespace().collect();
        for entry in self.base.entries() {
            let overlap = entry
                .trigger
                .split_whitespace()
                .filter(|token| words.contains(token))
                .count();
            if overlap >= KEYWORD_OVERLAP_THRESHOLD {
                tracing::debug!(
                    target: "transitguard::matcher",
                    trigger = entry.trigger,
                    overlap = overlap,
                    phase = "keyword_overlap",
                    "query matched trigger '{}' by {} overlapping tokens",
                    entry.trigger,
                    overlap
                );
                return MatchResult::Matched {
                    entry,
                    phase: MatchPhase::KeywordOverlap,
                };
            }
        }

        tracing::debug!(
            target: "transitguard::matcher",
            "no trigger qualified for query"
        );
        MatchResult::NoMatch
    }
}

impl Default for QueryMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> QueryMatcher {
        QueryMatcher::builtin()
    }

    #[test]
    fn test_substring_match_returns_exact_response() {
        let m = matcher();
        let result = m.best_match("what were the total crimes today in the city");
        assert_eq!(
            result.response(),
            Some("The total number of crimes today on Chicago Transit are 13.")
        );
        match result {
            MatchResult::Matched { phase, .. } => assert_eq!(phase, MatchPhase::Substring),
            MatchResult::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_reworded_query_falls_back_to_token_overlap() {
        // "total number of crimes today?" does not contain the trigger
        // "total crimes today" verbatim, so this lands in phase 2 on the
        // "total" and "crimes" tokens ("today?" is blocked by the "?").
        let m = matcher();
        let result = m.best_match("What are the total number of crimes today?");
        assert_eq!(
            result.response(),
            Some("The total number of crimes today on Chicago Transit are 13.")
        );
        match result {
            MatchResult::Matched { phase, .. } => assert_eq!(phase, MatchPhase::KeywordOverlap),
            MatchResult::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_high_risk_stop_query_matches_verbatim() {
        let m = matcher();
        let result = m.best_match("is this stop considered high-risk right now");
        let response = result.response().expect("expected a match");
        assert!(response.starts_with("Based on recent patterns"));
    }

    #[test]
    fn test_case_insensitive() {
        let m = matcher();
        let upper = m.best_match("Stations Near Me");
        let lower = m.best_match("stations near me");
        assert_eq!(upper.response(), lower.response());
        assert!(upper.is_match());
    }

    #[test]
    fn test_first_substring_match_wins_in_curation_order() {
        // Contains both "safety alerts today" (topic 1) and "total crimes today"
        // (topic 8); the earlier entry must win.
        let m = matcher();
        let result = m.best_match("safety alerts today and total crimes today");
        let response = result.response().expect("expected a match");
        assert!(response.starts_with("Based on incident distribution"));
    }

    #[test]
    fn test_keyword_overlap_reaches_threshold() {
        // No trigger is a substring, but "ward" and "dangerous" both appear in
        // the "ward 42 dangerous" trigger.
        let m = matcher();
        let result = m.best_match("how dangerous is my ward");
        let response = result.response().expect("expected a phase-2 match");
        assert!(response.starts_with("Yes. Ward 42 leads"));
        match result {
            MatchResult::Matched { phase, .. } => assert_eq!(phase, MatchPhase::KeywordOverlap),
            MatchResult::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_single_token_overlap_is_not_enough() {
        // "graffiti" alone overlaps two triggers by one token each.
        let m = matcher();
        let result = m.best_match("graffiti everywhere");
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_punctuation_blocks_token_overlap() {
        // "crimes?" is not the token "crimes", so phase 2 sees only "peak".
        let m = matcher();
        assert_eq!(m.best_match("peak crimes?"), MatchResult::NoMatch);
        // Without the punctuation, "crimes" + "peak" reach the threshold.
        assert!(matcher().best_match("peak crimes").is_match());
    }

    #[test]
    fn test_empty_query_is_no_match() {
        assert_eq!(matcher().best_match(""), MatchResult::NoMatch);
        assert_eq!(matcher().best_match("   "), MatchResult::NoMatch);
    }

    #[test]
    fn test_gibberish_is_no_match() {
        let m = matcher();
        assert_eq!(
            m.best_match("xyz completely unrelated gibberish"),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_idempotent() {
        let m = matcher();
        let query = "when do crimes peak on the red line";
        let first = m.best_match(query).response().map(str::to_string);
        let second = m.best_match(query).response().map(str::to_string);
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_short_query_can_still_overlap() {
        // Two tokens, both inside the "report incident" trigger.
        let m = matcher();
        let result = m.best_match("incident report");
        let response = result.response().expect("expected a match");
        assert!(response.starts_with("You can report incidents"));
    }
}
