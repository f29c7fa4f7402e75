//! # Summarization Client
//!
//! Boundary contract with the external summarization service. The engine
//! depends on the [`SummaryClient`] trait; the production implementation is
//! [`HttpSummaryClient`], constructed from an injected endpoint/credential
//! pair. Tests substitute recording clients.

pub mod http;

use async_trait::async_trait;

use crate::error::TasksumResult;

pub use http::HttpSummaryClient;

/// Remote summarization capability.
///
/// One attempt per invocation; callers that need resilience wrap this with
/// their own retry policy. Every failure mode (transport, non-success
/// response, empty body) surfaces as
/// [`TasksumError::ExternalServiceError`](crate::error::TasksumError).
#[async_trait]
pub trait SummaryClient: Send + Sync {
    /// Produce a short textual summary for a title/description pair.
    async fn summarize(&self, title: &str, description: Option<&str>) -> TasksumResult<String>;
}
