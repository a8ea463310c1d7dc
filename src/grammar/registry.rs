//! Ordered set of phrase-level its/it's mistakes.

use regex::{Match, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Words that read wrong after a bare "its" ("its not" should be "it's not").
pub const FORGOTTEN_APOSTROPHE_WORDS: &[&str] = &["not", "a", "ok", "the", "really"];

/// Prepositions that read wrong before "it's" ("of it's" should be "of its").
pub const EXTRA_APOSTROPHE_PREPOSITIONS: &[&str] = &[
    "of", "with", "on", "in", "for", "under", "above", "around", "inside",
];

static STANDARD: LazyLock<PatternRegistry> = LazyLock::new(|| {
    // The built-in lists are checked by the registry tests.
    PatternRegistry::from_word_lists(FORGOTTEN_APOSTROPHE_WORDS, EXTRA_APOSTROPHE_PREPOSITIONS)
        .expect("built-in word lists compile")
});

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Word list for {0} phrases is empty")]
    EmptyWordList(ErrorCategory),
    #[error("Invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },
    #[error("Failed to compile pattern for {phrase:?}: {source}")]
    Compile {
        phrase: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// "its" written where "it's" was meant.
    ForgottenApostrophe,
    /// "it's" written where the possessive "its" was meant.
    ExtraApostrophe,
}

impl ErrorCategory {
    /// Builds the offending phrase for a seed word of this category.
    pub fn phrase_for(self, word: &str) -> String {
        match self {
            ErrorCategory::ForgottenApostrophe => format!("its {}", word),
            ErrorCategory::ExtraApostrophe => format!("{} it's", word),
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::ForgottenApostrophe => write!(f, "forgotten-apostrophe"),
            ErrorCategory::ExtraApostrophe => write!(f, "extra-apostrophe"),
        }
    }
}

/// A case-insensitive, word-bounded phrase plus the kind of mistake it signals.
#[derive(Debug, Clone)]
pub struct ErrorPattern {
    phrase: String,
    category: ErrorCategory,
    regex: Regex,
}

impl ErrorPattern {
    pub fn new(phrase: impl Into<String>, category: ErrorCategory) -> Result<Self, RegistryError> {
        let phrase = phrase.into();
        let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&phrase)))
            .case_insensitive(true)
            .build()
            .map_err(|source| RegistryError::Compile {
                phrase: phrase.clone(),
                source,
            })?;

        Ok(Self {
            phrase,
            category,
            regex,
        })
    }

    /// The phrase as registered, in lower case.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// First occurrence in `text`, with the casing it was written in.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.regex.find(text)
    }
}

impl PartialEq for ErrorPattern {
    fn eq(&self, other: &Self) -> bool {
        self.phrase == other.phrase && self.category == other.category
    }
}

impl Eq for ErrorPattern {}

/// Immutable, insertion-ordered collection of [`ErrorPattern`]s.
///
/// Scanning order is part of the contract: every forgotten-apostrophe phrase
/// in seed order, then every extra-apostrophe phrase in seed order. When a
/// text matches several patterns the earliest registered one wins.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<ErrorPattern>,
}

impl PatternRegistry {
    /// Registry seeded from the built-in word lists, built once per process.
    pub fn standard() -> &'static PatternRegistry {
        &STANDARD
    }

    pub fn from_word_lists<W, P>(words: &[W], prepositions: &[P]) -> Result<Self, RegistryError>
    where
        W: AsRef<str>,
        P: AsRef<str>,
    {
        if words.is_empty() {
            return Err(RegistryError::EmptyWordList(
                ErrorCategory::ForgottenApostrophe,
            ));
        }
        if prepositions.is_empty() {
            return Err(RegistryError::EmptyWordList(ErrorCategory::ExtraApostrophe));
        }

        let seeds = words
            .iter()
            .map(|w| (w.as_ref(), ErrorCategory::ForgottenApostrophe))
            .chain(
                prepositions
                    .iter()
                    .map(|p| (p.as_ref(), ErrorCategory::ExtraApostrophe)),
            );

        let mut patterns = Vec::with_capacity(words.len() + prepositions.len());
        for (word, category) in seeds {
            check_word(word)?;
            let phrase = category.phrase_for(&word.to_lowercase());
            if patterns.iter().any(|p: &ErrorPattern| p.phrase == phrase) {
                continue;
            }
            patterns.push(ErrorPattern::new(phrase, category)?);
        }

        Ok(Self { patterns })
    }

    /// First registered pattern that occurs anywhere in `text`.
    pub fn find_pattern(&self, text: &str) -> Option<&ErrorPattern> {
        self.patterns.iter().find(|p| p.is_match(text))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternRegistry {
    type Item = &'a ErrorPattern;
    type IntoIter = std::slice::Iter<'a, ErrorPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

/// Seed words must be single tokens that start and end on a word character,
/// otherwise the `\b` anchors around the phrase stop meaning "whole word".
pub fn check_word(word: &str) -> Result<(), RegistryError> {
    let invalid = |reason| RegistryError::InvalidWord {
        word: word.to_string(),
        reason,
    };

    if word.is_empty() {
        return Err(invalid("empty"));
    }
    if word.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }

    let is_word_char = |c: char| c.is_alphanumeric() || c == '_';
    let first = word.chars().next().map_or(false, is_word_char);
    let last = word.chars().last().map_or(false, is_word_char);
    if !first || !last {
        return Err(invalid("must start and end with a letter or digit"));
    }

    Ok(())
}
