//! HTTP API of the claim service.
//!
//! A composable axum router over a shared [`types::ApiContext`]. Handlers
//! stay thin: parse, hand off to the blocking core under
//! `spawn_blocking`, map errors to [`error::ApiError`].

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use types::ApiContext;
