//! # Tasksum Core
//!
//! Task lifecycle engine and REST service that augments important tasks
//! with machine-generated summaries from an external summarization service.
//!
//! ## Architecture
//!
//! The core is the [`lifecycle::TaskLifecycleEngine`]: the one place that
//! decides when a summary must be (re)generated and sequences persistence
//! against the summarization call so partial failure leaves a consistent
//! record. Everything around it is a collaborator behind a trait:
//!
//! - [`store`] - Task persistence ([`store::TaskStore`], Postgres and
//!   in-memory adapters)
//! - [`summarizer`] - Summarization boundary ([`summarizer::SummaryClient`],
//!   reqwest-backed HTTP client)
//! - [`web`] - Axum request layer and the outward error taxonomy
//! - [`config`] - Environment-backed configuration, injected at bootstrap
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging bootstrap
//!
//! ## Key Behaviors
//!
//! - **Summarize-if-important**: a single shared predicate
//!   ([`models::task::Task::needs_summary`]) drives summarization on both
//!   Create and Update.
//! - **Soft summarization failure**: a failed summarization never rejects a
//!   committed mutation; it surfaces as a warning on the response.
//! - **Accepted staleness**: an existing summary is not regenerated when
//!   title or description change.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tasksum_core::lifecycle::TaskLifecycleEngine;
//! use tasksum_core::models::task::NewTask;
//! use tasksum_core::store::InMemoryTaskStore;
//! use tasksum_core::summarizer::HttpSummaryClient;
//! use tasksum_core::config::SummarizerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(InMemoryTaskStore::new());
//! let client = Arc::new(HttpSummaryClient::new(&SummarizerConfig::default())?);
//! let engine = TaskLifecycleEngine::new(store, client);
//!
//! let outcome = engine
//!     .create_task(NewTask {
//!         title: "Ship release".to_string(),
//!         description: Some("v2 rollout".to_string()),
//!         is_important: true,
//!     })
//!     .await?;
//! println!("created task {}", outcome.task.task_id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod models;
pub mod store;
pub mod summarizer;
pub mod web;

pub use config::{DatabaseConfig, SummarizerConfig, TasksumConfig, WebConfig};
pub use error::{TasksumError, TasksumResult};
pub use lifecycle::{TaskLifecycleEngine, TaskMutation};
pub use models::task::{NewTask, Task, TaskPatch};
pub use store::{InMemoryTaskStore, PgTaskStore, TaskStore};
pub use summarizer::{HttpSummaryClient, SummaryClient};
