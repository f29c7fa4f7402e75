//! # Web API Route Definitions
//!
//! HTTP route structure for the task summarizer API.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::web::handlers;
use crate::web::state::AppState;

/// Build the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        // Tasks API
        .route("/tasks", post(handlers::tasks::create_task))
        .route("/tasks", get(handlers::tasks::list_tasks))
        .route("/tasks/:task_id", get(handlers::tasks::get_task))
        .route("/tasks/:task_id", put(handlers::tasks::update_task))
        .route("/tasks/:task_id", delete(handlers::tasks::delete_task))
        .with_state(state)
}
