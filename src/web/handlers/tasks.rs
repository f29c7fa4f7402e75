//! # Task Management Handlers
//!
//! HTTP handlers for task creation, retrieval, update, deletion, and
//! listing. Each handler awaits the lifecycle engine directly and performs
//! no summarization decisions of its own.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::lifecycle::{TaskMutation, DEFAULT_PAGE_LIMIT};
use crate::models::task::{NewTask, Task, TaskPatch};
use crate::web::errors::ApiResult;
use crate::web::state::AppState;

/// Task payload returned by mutating endpoints.
///
/// `summary_warning` is present only when summarization failed softly: the
/// task below is committed either way.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    #[serde(flatten)]
    pub task: Task,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_warning: Option<String>,
}

impl From<TaskMutation> for TaskResponse {
    fn from(mutation: TaskMutation) -> Self {
        Self {
            task: mutation.task,
            summary_warning: mutation.summary_warning,
        }
    }
}

/// Acknowledgement for successful deletion
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Query parameters for task listing
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

/// Create a new task: POST /tasks
///
/// An important task triggers summary generation before the response is
/// returned.
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<NewTask>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    info!(
        title = %request.title,
        is_important = request.is_important,
        "Creating task via web API"
    );

    let mutation = state.engine.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(mutation.into())))
}

/// Get a specific task: GET /tasks/{task_id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = state.engine.get_task(task_id).await?;
    Ok(Json(task))
}

/// Partially update a task: PUT /tasks/{task_id}
///
/// A task that becomes important without a summary triggers summary
/// generation.
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(patch): Json<TaskPatch>,
) -> ApiResult<Json<TaskResponse>> {
    info!(task_id = task_id, "Updating task via web API");

    let mutation = state.engine.update_task(task_id, patch).await?;
    Ok(Json(mutation.into()))
}

/// Delete a task: DELETE /tasks/{task_id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<SuccessResponse>> {
    state.engine.delete_task(task_id).await?;
    Ok(Json(SuccessResponse {
        success: true,
        message: "Task deleted successfully".to_string(),
    }))
}

/// List tasks with pagination: GET /tasks?offset=&limit=
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.engine.list_tasks(query.offset, query.limit).await?;
    Ok(Json(tasks))
}
