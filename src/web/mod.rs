//! # Web Request Layer
//!
//! Thin Axum layer over the lifecycle engine. Handlers await the engine
//! directly and translate [`TasksumError`](crate::error::TasksumError) into
//! the stable outward error taxonomy; no decision logic lives here.

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::{ApiError, ApiResult};
pub use routes::app_router;
pub use state::AppState;
