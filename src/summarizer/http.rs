//! # HTTP Summarization Client
//!
//! `reqwest`-based [`SummaryClient`] implementation. POSTs the title and
//! description as JSON to the configured endpoint and extracts the summary
//! text from the response body. Nothing else in the body is interpreted.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::config::SummarizerConfig;
use crate::error::{TasksumError, TasksumResult};
use crate::summarizer::SummaryClient;

/// Request body sent to the summarization service.
#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Response body expected from the summarization service.
#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// HTTP client for the external summarization service.
#[derive(Debug, Clone)]
pub struct HttpSummaryClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl HttpSummaryClient {
    /// Build a client from injected configuration.
    pub fn new(config: &SummarizerConfig) -> TasksumResult<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            TasksumError::ConfigurationError(format!(
                "Invalid summarizer endpoint '{}': {e}",
                config.endpoint
            ))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                TasksumError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
            })?;

        debug!(
            endpoint = %endpoint,
            timeout_ms = config.timeout_ms,
            auth_configured = !config.api_key.is_empty(),
            "Created summarization client"
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl SummaryClient for HttpSummaryClient {
    async fn summarize(&self, title: &str, description: Option<&str>) -> TasksumResult<String> {
        let body = SummarizeRequest { title, description };

        debug!(endpoint = %self.endpoint, title = %title, "Requesting summary");

        let mut request = self.client.post(self.endpoint.clone()).json(&body);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Summarization request failed");
            TasksumError::ExternalServiceError(format!("Summarization request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            error!(status = %status, detail = %detail, "Summarization service returned an error");
            return Err(TasksumError::ExternalServiceError(format!(
                "Summarization service returned HTTP {status}"
            )));
        }

        let parsed: SummarizeResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse summarization response");
            TasksumError::ExternalServiceError(format!("Invalid summarization response: {e}"))
        })?;

        if parsed.summary.trim().is_empty() {
            return Err(TasksumError::ExternalServiceError(
                "Summarization service returned an empty summary".to_string(),
            ));
        }

        Ok(parsed.summary)
    }
}
