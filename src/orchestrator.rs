//! High-level coordinator: source → candidate filter → delay → reply → sink.

use crate::config::Config;
use crate::grammar::{MatchEngine, Verdict};
use crate::item::Item;
use crate::reply::{render_reply, ReplySink};
use crate::stream::delayed;
use futures::future;
use futures::stream::{Stream, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Counters for one run, mostly useful in tests and the final log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Items that came out of the delay buffer.
    pub released: u64,
    pub replied: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Replied,
    Skipped,
    Failed,
}

pub struct Orchestrator<K> {
    engine: Arc<MatchEngine>,
    sink: K,
    delay: Duration,
    delivery_pause: Duration,
}

impl<K: ReplySink> Orchestrator<K> {
    pub fn new(engine: MatchEngine, sink: K, config: &Config) -> Self {
        Self::with_timing(engine, sink, config.delay(), config.delivery_pause())
    }

    pub fn with_timing(engine: MatchEngine, sink: K, delay: Duration, delivery_pause: Duration) -> Self {
        Self {
            engine: Arc::new(engine),
            sink,
            delay,
            delivery_pause,
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Drives `source` to completion.
    ///
    /// Only comments the engine would flag enter the delay queue. Per-item
    /// failures are logged and skipped; a source error ends the run and is
    /// returned as-is.
    pub async fn run<S, E>(&self, source: S) -> Result<RunSummary, E>
    where
        S: Stream<Item = Result<Item, E>> + Send + 'static,
        E: std::error::Error + Send + 'static,
    {
        let engine = Arc::clone(&self.engine);
        let candidates = source.filter(move |next| {
            future::ready(match next {
                Ok(item) => engine.evaluate(item).is_flag(),
                Err(_) => true,
            })
        });

        let released = delayed(candidates, self.delay);
        futures::pin_mut!(released);

        let mut summary = RunSummary::default();
        while let Some(next) = released.next().await {
            let item = match next {
                Ok(item) => item,
                Err(e) => {
                    error!(error = %e, ?summary, "Comment source failed");
                    return Err(e);
                }
            };

            summary.released += 1;
            match self.handle(&item).await {
                Outcome::Replied => summary.replied += 1,
                Outcome::Failed => summary.failed += 1,
                Outcome::Skipped => {}
            }
        }

        Ok(summary)
    }

    #[instrument(skip(self, item), fields(id = %item.id, author = %item.author))]
    async fn handle(&self, item: &Item) -> Outcome {
        let Verdict::Flag(pattern) = self.engine.evaluate(item) else {
            return Outcome::Skipped;
        };

        let result = match self.engine.build_reply(item, pattern) {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Could not build reply");
                return Outcome::Failed;
            }
        };

        let body = render_reply(&result);
        info!(
            age_seconds = item.age().num_seconds(),
            matched = %result.matched_phrase,
            corrected = %result.corrected_phrase,
            "Replying"
        );

        match self.sink.send_reply(item, &body).await {
            Ok(()) => Outcome::Replied,
            Err(e) => {
                error!(
                    error = %e,
                    pause_seconds = self.delivery_pause.as_secs(),
                    "Reply delivery failed"
                );
                tokio::time::sleep(self.delivery_pause).await;
                Outcome::Failed
            }
        }
    }
}
