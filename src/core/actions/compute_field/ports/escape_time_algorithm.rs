use crate::core::data::complex::Complex;

pub trait EscapeTimeAlgorithm {
    /// Escape count for `point`, or [`SENTINEL`](crate::core::data::iteration_field::SENTINEL)
    /// for points treated as members.
    fn classify(&self, point: Complex) -> i32;
}
