//! Single-line excerpt around a match, with the match highlighted.

use super::registry::ErrorPattern;
use regex::Regex;
use thiserror::Error;

/// Whitespace-delimited words kept on each side of the match.
pub const CONTEXT_WORDS: usize = 5;
pub const ELLIPSIS: &str = "...";
pub const HIGHLIGHT: &str = "**";

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("No line contains a match for {phrase:?}")]
    NoMatchingLine { phrase: String },
    #[error("Failed to build context pattern: {0}")]
    Context(#[from] regex::Error),
}

/// The first line of `text` in which `pattern` occurs.
pub fn line_containing<'t>(text: &'t str, pattern: &ErrorPattern) -> Option<&'t str> {
    text.lines().find(|line| pattern.is_match(line))
}

/// Excerpt of the line holding the match: up to [`CONTEXT_WORDS`] words either
/// side, ellipses where the line was cut, and the match itself wrapped in
/// [`HIGHLIGHT`] when `highlight` is set.
///
/// Callers must already know that `pattern` occurs in `text`; otherwise this
/// returns [`SnippetError::NoMatchingLine`].
pub fn snippet(text: &str, pattern: &ErrorPattern, highlight: bool) -> Result<String, SnippetError> {
    let no_line = || SnippetError::NoMatchingLine {
        phrase: pattern.phrase().to_string(),
    };

    let line = line_containing(text, pattern).ok_or_else(no_line)?;
    let matched = pattern.find(line).ok_or_else(no_line)?.as_str();

    let context = Regex::new(&format!(
        r"(?P<before>(?:\b\S+\s+){{0,{n}}})(?P<phrase>\b{phrase}\b)(?P<after>(?:\s+\S+){{0,{n}}})",
        n = CONTEXT_WORDS,
        phrase = regex::escape(matched),
    ))?;
    let caps = context.captures(line).ok_or_else(no_line)?;
    let (Some(span), Some(phrase)) = (caps.get(0), caps.name("phrase")) else {
        return Err(no_line());
    };

    let before = caps.name("before").map_or("", |m| m.as_str());
    let after = caps.name("after").map_or("", |m| m.as_str());

    let mut out = String::with_capacity(span.len() + 2 * (ELLIPSIS.len() + HIGHLIGHT.len()));
    if span.start() > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(before);
    if highlight {
        out.push_str(HIGHLIGHT);
        out.push_str(phrase.as_str());
        out.push_str(HIGHLIGHT);
    } else {
        out.push_str(phrase.as_str());
    }
    out.push_str(after);
    if span.end() != line.len() {
        out.push_str(ELLIPSIS);
    }

    Ok(out)
}
