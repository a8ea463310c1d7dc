//! Newline-delimited JSON comments as an upstream [`Item`] stream.

use crate::item::Item;
use chrono::{DateTime, Utc};
use futures::stream::{self, Stream};
use serde::Deserialize;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read comment stream: {0}")]
    Io(#[from] std::io::Error),
}

/// One line of input, e.g.
/// `{"id": "t1_abc", "author": "someone", "body": "Its ok", "created_utc": 1700000000.0}`.
#[derive(Debug, Deserialize)]
struct RawComment {
    #[serde(default)]
    id: Option<String>,
    author: String,
    body: String,
    #[serde(default)]
    created_utc: Option<f64>,
}

impl From<RawComment> for Item {
    fn from(raw: RawComment) -> Self {
        let created_at = raw
            .created_utc
            .and_then(|secs| {
                DateTime::<Utc>::from_timestamp(
                    secs.trunc() as i64,
                    (secs.fract() * 1_000_000_000.0) as u32,
                )
            })
            .unwrap_or_else(Utc::now);

        Item {
            id: raw.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            author: raw.author,
            body: raw.body,
            created_at,
        }
    }
}

pub fn parse_comment(line: &str) -> Result<Item, serde_json::Error> {
    serde_json::from_str::<RawComment>(line).map(Item::from)
}

/// Reads one comment per line until EOF.
///
/// Blank lines are ignored and malformed lines are logged and skipped. A read
/// error is yielded once and ends the stream.
pub fn comment_stream<R>(reader: R) -> impl Stream<Item = Result<Item, SourceError>> + Send + 'static
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    stream::unfold(Some(reader.lines()), |state| async move {
        let mut lines = state?;
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => match parse_comment(&line) {
                    Ok(item) => return Some((Ok(item), Some(lines))),
                    Err(e) => warn!(error = %e, "Skipping malformed comment line"),
                },
                Ok(None) => return None,
                Err(e) => return Some((Err(SourceError::Io(e)), None)),
            }
        }
    })
}
