//! Shared building blocks for the panel features.

mod task;

pub use task::{TaskId, TaskKind, TaskSeq, TaskState, Tasks};
