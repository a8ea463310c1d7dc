//! Order-preserving relay that holds every item until it is old enough.
//!
//! Two tasks share one unbounded channel:
//!   1. the ingest task drains the source as fast as it produces, stamping
//!      each item with the moment it was observed,
//!   2. the returned stream pops the head of the queue and sleeps out
//!      whatever is left of the delay before yielding it.
//!
//! Because release is FIFO and each wait only concerns the head item, output
//! throughput settles to the input rate without a separate limiter.

use futures::stream::{self, Stream, StreamExt};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::time::{self, Duration, Instant};
use tracing::{debug, trace};

type Stamped<T, E> = (Instant, Result<T, E>);

/// Relays `source` unchanged, releasing each `Ok` item no earlier than
/// `delay` after it was pulled from the source.
///
/// The first `Err` the source yields is passed through in order, after the
/// items ahead of it, and ends the stream. Must be called from inside a tokio
/// runtime since the ingest side runs as a spawned task. Dropping the
/// returned stream stops ingestion at the next item.
pub fn delayed<S, T, E>(source: S, delay: Duration) -> impl Stream<Item = Result<T, E>> + Send
where
    S: Stream<Item = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<Stamped<T, E>>();
    tokio::spawn(ingest(source, tx));

    stream::unfold(rx, move |mut rx| async move {
        let (observed_at, next) = rx.recv().await?;
        if next.is_ok() {
            let age = observed_at.elapsed();
            if age < delay {
                let wait = delay - age;
                trace!(?wait, "Holding item");
                time::sleep(wait).await;
            }
        }
        Some((next, rx))
    })
}

async fn ingest<S, T, E>(source: S, tx: UnboundedSender<Stamped<T, E>>)
where
    S: Stream<Item = Result<T, E>>,
{
    let mut source = Box::pin(source);
    let mut ingested: u64 = 0;

    while let Some(next) = source.next().await {
        let terminal = next.is_err();
        if tx.send((Instant::now(), next)).is_err() {
            debug!(ingested, "Release side dropped, stopping ingest");
            return;
        }
        ingested += 1;
        if terminal {
            debug!(ingested, "Source failed, stopping ingest");
            return;
        }
    }

    debug!(ingested, "Source exhausted");
}
