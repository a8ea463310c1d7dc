//! Where finished replies go.

use crate::item::Item;
use async_trait::async_trait;
use serde_json::json;
use tokio::io::{self, AsyncWriteExt};

/// Delivery seam. Failures are per item; the caller decides how to recover.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_reply(&self, item: &Item, body: &str) -> anyhow::Result<()>;
}

/// Writes each reply as one JSON line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

#[async_trait]
impl ReplySink for StdoutSink {
    async fn send_reply(&self, item: &Item, body: &str) -> anyhow::Result<()> {
        let line = json!({
            "in_reply_to": item.id,
            "author": item.author,
            "body": body,
        });

        let mut stdout = io::stdout();
        stdout.write_all(format!("{}\n", line).as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}
