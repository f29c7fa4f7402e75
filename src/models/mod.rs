//! Data layer for the task summarizer service.

pub mod task;

pub use task::{NewTask, Task, TaskPatch};
