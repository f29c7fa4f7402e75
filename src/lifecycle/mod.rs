//! # Task Lifecycle Engine
//!
//! The single authoritative place where "does this task need a summary right
//! now" is decided, and where persistence and summarization are sequenced so
//! partial failure leaves a consistent record.
//!
//! ## Summarize-if-important
//!
//! Create and Update both route through [`Task::needs_summary`] and
//! [`TaskLifecycleEngine::ensure_summary`]: important tasks with no usable
//! summary get exactly one summarization attempt, and the result is attached
//! through the store's guarded write. A summarization failure (or a failure
//! of the secondary attach write) never rejects the mutation; the committed
//! task is returned with the failure folded into
//! [`TaskMutation::summary_warning`].
//!
//! ## Consistency
//!
//! The initial insert and the summarization call do not share a transaction.
//! A crash or client failure between them leaves a durable
//! `is_important = true, summary = NULL` row; the next mutating call that
//! observes the condition heals it.

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{TasksumError, TasksumResult};
use crate::models::task::{NewTask, Task, TaskPatch};
use crate::store::TaskStore;
use crate::summarizer::SummaryClient;

/// Default number of tasks returned by a list call.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;
/// Upper bound on the list page size.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Outcome of a mutating engine operation.
///
/// `summary_warning` carries a soft summarization failure: the task below is
/// committed either way.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskMutation {
    pub task: Task,
    pub summary_warning: Option<String>,
}

impl TaskMutation {
    fn clean(task: Task) -> Self {
        Self {
            task,
            summary_warning: None,
        }
    }

    fn with_warning(task: Task, warning: String) -> Self {
        Self {
            task,
            summary_warning: Some(warning),
        }
    }
}

/// Orchestrates task CRUD against the store and decides, per mutation,
/// whether the summarization client must be invoked.
pub struct TaskLifecycleEngine {
    store: Arc<dyn TaskStore>,
    summarizer: Arc<dyn SummaryClient>,
}

impl TaskLifecycleEngine {
    pub fn new(store: Arc<dyn TaskStore>, summarizer: Arc<dyn SummaryClient>) -> Self {
        Self { store, summarizer }
    }

    /// Create a task. Important tasks get a synchronous summarization
    /// attempt before the call returns; its failure is soft.
    pub async fn create_task(&self, new_task: NewTask) -> TasksumResult<TaskMutation> {
        if new_task.title.trim().is_empty() {
            return Err(TasksumError::ValidationError(
                "title must not be empty".to_string(),
            ));
        }

        let task = self.store.insert(new_task).await?;
        info!(
            task_id = task.task_id,
            is_important = task.is_important,
            "Created task"
        );

        Ok(self.ensure_summary(task).await)
    }

    /// Fetch a task by id.
    pub async fn get_task(&self, task_id: i64) -> TasksumResult<Task> {
        self.store
            .find_by_id(task_id)
            .await?
            .ok_or(TasksumError::TaskNotFound { task_id })
    }

    /// Apply a partial update, then re-evaluate the summarization condition.
    ///
    /// A task whose summary already exists is not re-summarized, even when
    /// title or description changed. Accepted staleness.
    pub async fn update_task(&self, task_id: i64, patch: TaskPatch) -> TasksumResult<TaskMutation> {
        if let Some(title) = patch.title.as_deref() {
            if title.trim().is_empty() {
                return Err(TasksumError::ValidationError(
                    "title must not be empty".to_string(),
                ));
            }
        }

        let task = self
            .store
            .update(task_id, &patch)
            .await?
            .ok_or(TasksumError::TaskNotFound { task_id })?;
        info!(task_id = task.task_id, "Updated task");

        Ok(self.ensure_summary(task).await)
    }

    /// Hard-delete a task. A repeated delete of the same id reports
    /// NotFound, not success.
    pub async fn delete_task(&self, task_id: i64) -> TasksumResult<()> {
        if !self.store.delete(task_id).await? {
            return Err(TasksumError::TaskNotFound { task_id });
        }
        info!(task_id = task_id, "Deleted task");
        Ok(())
    }

    /// List tasks in insertion order. `limit` defaults to
    /// [`DEFAULT_PAGE_LIMIT`] at the request layer and is capped at
    /// [`MAX_PAGE_LIMIT`] here.
    pub async fn list_tasks(&self, offset: i64, limit: i64) -> TasksumResult<Vec<Task>> {
        if offset < 0 {
            return Err(TasksumError::ValidationError(
                "offset must not be negative".to_string(),
            ));
        }
        if limit <= 0 {
            return Err(TasksumError::ValidationError(
                "limit must be positive".to_string(),
            ));
        }
        self.store.list(offset, limit.min(MAX_PAGE_LIMIT)).await
    }

    /// Run the summarize-if-important rule on a freshly mutated task.
    ///
    /// Failures on this path are soft: the mutation has already committed,
    /// so the task is returned as stored with the failure as a warning.
    async fn ensure_summary(&self, task: Task) -> TaskMutation {
        if !task.needs_summary() {
            return TaskMutation::clean(task);
        }

        let summary = match self
            .summarizer
            .summarize(&task.title, task.description.as_deref())
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                warn!(
                    task_id = task.task_id,
                    error = %e,
                    "Summarization failed; task committed without summary"
                );
                return TaskMutation::with_warning(task, e.to_string());
            }
        };

        match self.store.attach_summary(task.task_id, &summary).await {
            Ok(Some(updated)) => {
                info!(task_id = updated.task_id, "Attached summary");
                TaskMutation::clean(updated)
            }
            // Guard did not match: a concurrent writer attached first, or
            // the row is gone. Surface whatever is durable now.
            Ok(None) => match self.store.find_by_id(task.task_id).await {
                Ok(Some(current)) => TaskMutation::clean(current),
                _ => TaskMutation::clean(task),
            },
            Err(e) => {
                warn!(
                    task_id = task.task_id,
                    error = %e,
                    "Summary could not be attached; task committed without summary"
                );
                TaskMutation::with_warning(
                    task,
                    format!("summary could not be attached: {e}"),
                )
            }
        }
    }
}
