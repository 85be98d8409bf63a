//! One-shot background computation of a single escape field.

mod field_task;

pub use field_task::{ComputeError, FieldTask, spawn_compute};
