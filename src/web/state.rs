//! # Web API Application State
//!
//! Shared state for the request layer: the lifecycle engine with its
//! injected store and summarization client.

use std::sync::Arc;

use crate::lifecycle::TaskLifecycleEngine;

/// Shared application state for the web API
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<TaskLifecycleEngine>,
}

impl AppState {
    pub fn new(engine: Arc<TaskLifecycleEngine>) -> Self {
        Self { engine }
    }
}
