//! Shared test helpers: a recording summarization client with scriptable
//! results.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

use tasksum_core::error::{TasksumError, TasksumResult};
use tasksum_core::summarizer::SummaryClient;

/// One recorded summarization invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub title: String,
    pub description: Option<String>,
}

/// Mock summarization client for engine tests.
///
/// Records every invocation and returns scripted results: queued one-shot
/// results first, then the configured default.
pub struct MockSummaryClient {
    calls: Mutex<Vec<RecordedCall>>,
    scripted: Mutex<VecDeque<TasksumResult<String>>>,
    default_result: TasksumResult<String>,
}

impl MockSummaryClient {
    /// Client that always succeeds with the given summary.
    pub fn returning(summary: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            scripted: Mutex::new(VecDeque::new()),
            default_result: Ok(summary.to_string()),
        }
    }

    /// Client that always fails with an external-service error.
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            scripted: Mutex::new(VecDeque::new()),
            default_result: Err(TasksumError::ExternalServiceError(message.to_string())),
        }
    }

    /// Queue a one-shot result consumed before the default.
    pub fn push_result(&self, result: TasksumResult<String>) {
        self.scripted.lock().push_back(result);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SummaryClient for MockSummaryClient {
    async fn summarize(&self, title: &str, description: Option<&str>) -> TasksumResult<String> {
        self.calls.lock().push(RecordedCall {
            title: title.to_string(),
            description: description.map(str::to_string),
        });

        match self.scripted.lock().pop_front() {
            Some(result) => result,
            None => self.default_result.clone(),
        }
    }
}
