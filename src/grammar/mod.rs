//! Detection and correction of its/it's mix-ups.
//!
//! ```text
//! Item → matching patterns in order → SuppressionPolicy → build_reply → MatchResult
//! ```
//!
//! Everything here is synchronous and free of shared mutable state, so one
//! engine can be shared across tasks behind an `Arc`.

pub mod correction;
pub mod registry;
pub mod snippet;
pub mod suppression;

pub use correction::{swap, toggle_apostrophe};
pub use registry::{
    ErrorCategory, ErrorPattern, PatternRegistry, RegistryError, EXTRA_APOSTROPHE_PREPOSITIONS,
    FORGOTTEN_APOSTROPHE_WORDS,
};
pub use snippet::{line_containing, snippet, SnippetError};
pub use suppression::{SuppressReason, SuppressionPolicy};

use crate::item::Item;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Pattern {phrase:?} does not occur in the comment")]
    PatternAbsent { phrase: String },
    #[error("Snippet extraction failed: {0}")]
    Snippet(#[from] SnippetError),
}

/// What the engine found in one comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub category: ErrorCategory,
    /// The phrase exactly as the commenter wrote it.
    pub matched_phrase: String,
    pub corrected_phrase: String,
    pub snippet: String,
}

/// Outcome of scanning a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    NoMatch,
    Suppressed {
        pattern: &'a ErrorPattern,
        reason: SuppressReason,
    },
    Flag(&'a ErrorPattern),
}

impl<'a> Verdict<'a> {
    pub fn is_flag(&self) -> bool {
        matches!(self, Verdict::Flag(_))
    }

    pub fn pattern(&self) -> Option<&'a ErrorPattern> {
        match *self {
            Verdict::NoMatch => None,
            Verdict::Suppressed { pattern, .. } | Verdict::Flag(pattern) => Some(pattern),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchEngine {
    registry: PatternRegistry,
    policy: SuppressionPolicy,
}

impl MatchEngine {
    pub fn new(registry: PatternRegistry, policy: SuppressionPolicy) -> Self {
        Self { registry, policy }
    }

    /// Engine over the built-in word lists.
    pub fn standard(own_identity: impl Into<String>) -> Self {
        Self::new(
            PatternRegistry::standard().clone(),
            SuppressionPolicy::new(own_identity),
        )
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn policy(&self) -> &SuppressionPolicy {
        &self.policy
    }

    pub fn find_pattern(&self, text: &str) -> Option<&ErrorPattern> {
        self.registry.find_pattern(text)
    }

    pub fn should_suppress(&self, item: &Item, pattern: &ErrorPattern) -> bool {
        self.policy.should_suppress(item, pattern)
    }

    /// Walks the matching patterns in registration order and flags the first
    /// one the suppression policy lets through.
    ///
    /// `Suppressed` carries the first vetoed match and is only returned when
    /// every match was vetoed.
    pub fn evaluate(&self, item: &Item) -> Verdict<'_> {
        let mut first_vetoed = None;

        for pattern in self.registry.iter().filter(|p| p.is_match(&item.body)) {
            debug!(id = %item.id, phrase = pattern.phrase(), category = %pattern.category(), "Pattern matched");

            match self.policy.reason(item, pattern) {
                Some(reason) => {
                    info!(id = %item.id, phrase = pattern.phrase(), %reason, "Skipping match");
                    if first_vetoed.is_none() {
                        first_vetoed = Some(Verdict::Suppressed { pattern, reason });
                    }
                }
                None => return Verdict::Flag(pattern),
            }
        }

        first_vetoed.unwrap_or(Verdict::NoMatch)
    }

    /// Matched phrase, its correction, and a highlighted excerpt.
    ///
    /// `pattern` must occur in the item's body; anything else is a caller bug
    /// and comes back as an error for this item only.
    pub fn build_reply(&self, item: &Item, pattern: &ErrorPattern) -> Result<MatchResult, EngineError> {
        let matched = pattern
            .find(&item.body)
            .ok_or_else(|| EngineError::PatternAbsent {
                phrase: pattern.phrase().to_string(),
            })?
            .as_str();

        Ok(MatchResult {
            category: pattern.category(),
            matched_phrase: matched.to_string(),
            corrected_phrase: toggle_apostrophe(matched),
            snippet: snippet(&item.body, pattern, true)?,
        })
    }
}

#[cfg(test)]
mod tests;
