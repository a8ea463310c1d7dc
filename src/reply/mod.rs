//! Turning a [`MatchResult`](crate::grammar::MatchResult) into a delivered reply.

pub mod sink;
pub mod template;

pub use sink::{ReplySink, StdoutSink};
pub use template::render_reply;
