//! Relays a live comment stream through a fixed delay and drafts corrections
//! for its/it's mix-ups found along the way.
//!
//! ```text
//! comments → stream::delayed → grammar::MatchEngine → reply::render_reply → ReplySink
//! ```

pub mod config;
pub mod grammar;
pub mod item;
pub mod orchestrator;
pub mod reply;
pub mod stream;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use grammar::{
    ErrorCategory, ErrorPattern, MatchEngine, MatchResult, PatternRegistry, SuppressionPolicy,
    Verdict,
};
pub use item::Item;
pub use orchestrator::{Orchestrator, RunSummary};
pub use reply::{ReplySink, StdoutSink};
pub use stream::{comment_stream, delayed};
