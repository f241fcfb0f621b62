//! Client for the external reasoning service that issues claim verdicts.
//!
//! The service is a black box: prompts go out, JSON comes back. Everything
//! downstream treats the verdict as opaque except for shape and boundary
//! checks at the deserialization seam.

pub mod assistant;
pub mod client;
pub mod parser;
pub mod prompt;

pub use assistant::{ApplicationDraft, ChatReply, MissingField};
pub use client::{DocumentPart, GeminiClient, ReasoningClient};

/// Errors from the reasoning call and its response handling.
#[derive(Debug, thiserror::Error)]
pub enum AdjudicatorError {
    #[error("Cannot connect to reasoning service at {0}")]
    Connection(String),

    #[error("Reasoning request timed out after {0}s")]
    Timeout(u64),

    #[error("Reasoning service returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Reasoning response violates the expected schema: {0}")]
    MalformedResponse(String),

    #[error("Failed to parse reasoning response: {0}")]
    JsonParsing(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}
