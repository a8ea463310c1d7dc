//! Upstream comments and the delay relay they pass through.

pub mod delay;
pub mod source;

pub use delay::delayed;
pub use source::{comment_stream, parse_comment, SourceError};
