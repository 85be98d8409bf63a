use std::fmt;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::compute_field::compute_field::compute_field;
use crate::core::actions::compute_field::compute_field_parallel_rayon::compute_field_parallel_rayon;
use crate::core::actions::progress::ProgressSink;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputeStrategy {
    Serial,
    #[default]
    ParallelRayon,
}

impl fmt::Display for ComputeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => write!(f, "serial"),
            Self::ParallelRayon => write!(f, "parallel (rayon)"),
        }
    }
}

pub fn compute_field_using<C, P>(
    strategy: ComputeStrategy,
    viewport: &Viewport,
    cancel: &C,
    progress: &P,
) -> Result<IterationField, Cancelled>
where
    C: CancelToken + ?Sized,
    P: ProgressSink + ?Sized,
{
    match strategy {
        ComputeStrategy::Serial => compute_field(viewport, cancel, progress),
        ComputeStrategy::ParallelRayon => compute_field_parallel_rayon(viewport, cancel, progress),
    }
}
