use std::time::Duration;

use crate::core::data::iteration_field::IterationField;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub field: IterationField,
    pub compute_duration: Duration,
}
