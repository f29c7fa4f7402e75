//! # Task Store
//!
//! Persistence boundary for task records. The lifecycle engine talks to the
//! [`TaskStore`] trait only; the concrete adapter is injected at bootstrap.
//!
//! Two adapters ship with the crate: [`PgTaskStore`] for production and
//! [`InMemoryTaskStore`] for deterministic tests and dependency-free runs.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::TasksumResult;
use crate::models::task::{NewTask, Task, TaskPatch};

pub use memory::InMemoryTaskStore;
pub use postgres::PgTaskStore;

/// Persistence contract consumed by the lifecycle engine.
///
/// Same-id writes must be serialized by the implementation (row-level
/// concurrency control); the engine adds no locking of its own.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a new task; the store assigns the id and timestamps.
    async fn insert(&self, new_task: NewTask) -> TasksumResult<Task>;

    /// Fetch a task by id.
    async fn find_by_id(&self, task_id: i64) -> TasksumResult<Option<Task>>;

    /// List tasks in insertion order.
    async fn list(&self, offset: i64, limit: i64) -> TasksumResult<Vec<Task>>;

    /// Apply the present fields of a patch. Returns `None` when the id does
    /// not exist.
    async fn update(&self, task_id: i64, patch: &TaskPatch) -> TasksumResult<Option<Task>>;

    /// Attach a generated summary, but only while the stored summary is
    /// still empty. Returns `None` when the guard did not match (row gone,
    /// or a concurrent writer attached first); an attached summary is never
    /// silently overwritten.
    async fn attach_summary(&self, task_id: i64, summary: &str) -> TasksumResult<Option<Task>>;

    /// Hard-delete a task. Returns whether a row was removed.
    async fn delete(&self, task_id: i64) -> TasksumResult<bool>;
}
