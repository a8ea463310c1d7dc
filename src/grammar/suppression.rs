//! Decides whether a detected mistake is worth pointing out.

use super::registry::ErrorPattern;
use super::snippet::line_containing;
use crate::item::Item;
use std::fmt;

/// Lines starting with this are quoting someone else.
pub const QUOTE_MARKER: char = '>';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// The whole comment is lower case, which reads as a style choice.
    AllLowercase,
    /// The mistake sits in a quoted line.
    QuotedLine,
    /// The comment was written by the bot itself.
    OwnComment,
}

impl fmt::Display for SuppressReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuppressReason::AllLowercase => write!(f, "comment is all lower case"),
            SuppressReason::QuotedLine => write!(f, "match is inside quoted text"),
            SuppressReason::OwnComment => write!(f, "comment is our own"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuppressionPolicy {
    own_identity: String,
}

impl SuppressionPolicy {
    pub fn new(own_identity: impl Into<String>) -> Self {
        Self {
            own_identity: own_identity.into(),
        }
    }

    pub fn own_identity(&self) -> &str {
        &self.own_identity
    }

    /// The first reason that vetoes the match, checked in a fixed order.
    pub fn reason(&self, item: &Item, pattern: &ErrorPattern) -> Option<SuppressReason> {
        if item.body == item.body.to_lowercase() {
            return Some(SuppressReason::AllLowercase);
        }

        let quoted = line_containing(&item.body, pattern)
            .map_or(false, |line| line.starts_with(QUOTE_MARKER));
        if quoted {
            return Some(SuppressReason::QuotedLine);
        }

        if item.author == self.own_identity {
            return Some(SuppressReason::OwnComment);
        }

        None
    }

    pub fn should_suppress(&self, item: &Item, pattern: &ErrorPattern) -> bool {
        self.reason(item, pattern).is_some()
    }
}
