//! Retrieval of screening transcripts from the staffing API.
//!
//! A screening record points at a call; the call owns the message list.
//! Failures here belong to the caller; the analyzer only sees messages.

pub mod error;
pub mod source;

pub use error::{UpstreamError, UpstreamResult};
pub use source::{
    HttpTranscriptSource, SourceFuture, TranscriptSource, UpstreamConfig, extract_call_id,
};
