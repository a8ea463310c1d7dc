//! The unit of text that flows through the relay.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One comment as observed on the upstream stream.
///
/// Items are never mutated once built; the delay buffer moves them by value
/// and the match engine only borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Time elapsed since the upstream says the comment was written.
    pub fn age(&self) -> Duration {
        Utc::now() - self.created_at
    }
}
