//! # In-Memory Task Store
//!
//! [`TaskStore`] adapter backed by a `BTreeMap` behind a `parking_lot`
//! lock. Mirrors the Postgres adapter's contract (id assignment,
//! store-managed timestamps, the guarded summary attach) so engine tests
//! run deterministically without a database.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::error::TasksumResult;
use crate::models::task::{NewTask, Task, TaskPatch};
use crate::store::TaskStore;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    tasks: BTreeMap<i64, Task>,
}

/// In-memory task store for tests and dependency-free runs.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    inner: RwLock<Inner>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.inner.read().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().tasks.is_empty()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, new_task: NewTask) -> TasksumResult<Task> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let now = Utc::now().naive_utc();
        let task = Task {
            task_id: inner.next_id,
            title: new_task.title,
            description: new_task.description,
            is_important: new_task.is_important,
            summary: None,
            created_at: now,
            updated_at: now,
        };
        inner.tasks.insert(task.task_id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, task_id: i64) -> TasksumResult<Option<Task>> {
        Ok(self.inner.read().tasks.get(&task_id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> TasksumResult<Vec<Task>> {
        // BTreeMap iteration is id-ascending, which is insertion order here.
        Ok(self
            .inner
            .read()
            .tasks
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, task_id: i64, patch: &TaskPatch) -> TasksumResult<Option<Task>> {
        let mut inner = self.inner.write();
        match inner.tasks.get_mut(&task_id) {
            Some(task) => {
                patch.apply_to(task);
                task.updated_at = Utc::now().naive_utc();
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn attach_summary(&self, task_id: i64, summary: &str) -> TasksumResult<Option<Task>> {
        let mut inner = self.inner.write();
        match inner.tasks.get_mut(&task_id) {
            Some(task) if !matches!(task.summary.as_deref(), Some(s) if !s.is_empty()) => {
                task.summary = Some(summary.to_string());
                task.updated_at = Utc::now().naive_utc();
                Ok(Some(task.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, task_id: i64) -> TasksumResult<bool> {
        Ok(self.inner.write().tasks.remove(&task_id).is_some())
    }
}
