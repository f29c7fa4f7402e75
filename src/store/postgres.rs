//! # Postgres Task Store
//!
//! SQLx-backed [`TaskStore`] implementation.
//!
//! ## Database Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!   task_id      BIGSERIAL PRIMARY KEY,
//!   title        VARCHAR NOT NULL,
//!   description  TEXT,
//!   is_important BOOLEAN NOT NULL DEFAULT FALSE,
//!   summary      TEXT,
//!   created_at   TIMESTAMP NOT NULL DEFAULT NOW(),
//!   updated_at   TIMESTAMP NOT NULL DEFAULT NOW()
//! );
//! ```
//!
//! Partial updates and the summary-attach guard are single statements, so
//! per-row serialization comes from Postgres itself.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::TasksumResult;
use crate::models::task::{NewTask, Task, TaskPatch};
use crate::store::TaskStore;

/// Postgres-backed task store.
#[derive(Debug, Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn insert(&self, new_task: NewTask) -> TasksumResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, is_important, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING task_id, title, description, is_important, summary, created_at, updated_at
            "#,
        )
        .bind(&new_task.title)
        .bind(&new_task.description)
        .bind(new_task.is_important)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn find_by_id(&self, task_id: i64) -> TasksumResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, title, description, is_important, summary, created_at, updated_at
            FROM tasks
            WHERE task_id = $1
            "#,
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn list(&self, offset: i64, limit: i64) -> TasksumResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, title, description, is_important, summary, created_at, updated_at
            FROM tasks
            ORDER BY task_id ASC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update(&self, task_id: i64, patch: &TaskPatch) -> TasksumResult<Option<Task>> {
        // Absent fields keep their stored value; the summary column only
        // changes when the patch carries the field explicitly (null clears).
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                is_important = COALESCE($4, is_important),
                summary = CASE WHEN $5 THEN $6 ELSE summary END,
                updated_at = NOW()
            WHERE task_id = $1
            RETURNING task_id, title, description, is_important, summary, created_at, updated_at
            "#,
        )
        .bind(task_id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.is_important)
        .bind(patch.summary.is_some())
        .bind(patch.summary.clone().flatten())
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn attach_summary(&self, task_id: i64, summary: &str) -> TasksumResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET summary = $2, updated_at = NOW()
            WHERE task_id = $1 AND (summary IS NULL OR summary = '')
            RETURNING task_id, title, description, is_important, summary, created_at, updated_at
            "#,
        )
        .bind(task_id)
        .bind(summary)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn delete(&self, task_id: i64) -> TasksumResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE task_id = $1
            "#,
        )
        .bind(task_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
