//! Escape-time field calculator for the Mandelbrot set.
//!
//! Maps a [`Viewport`] of the complex plane onto a pixel grid and returns an
//! [`IterationField`] holding, per pixel, the iteration at which `z ← z² + c`
//! escaped, or [`SENTINEL`] for points treated as members. Computation reports
//! row progress and can be cancelled at any row boundary.

mod controllers;
mod core;

pub use controllers::background::{ComputeError, FieldTask, spawn_compute};
pub use controllers::interactive::{FieldEvent, FieldSink, FieldWorker, FrameData};
pub use crate::core::actions::cancellation::{CancelToken, CancellationFlag, Cancelled, NeverCancel};
pub use crate::core::actions::compute_field::compute_field::{compute_field, compute_field_with};
pub use crate::core::actions::compute_field::compute_field_parallel_rayon::{
    compute_field_parallel_rayon, compute_field_parallel_rayon_with,
};
pub use crate::core::actions::compute_field::compute_strategy::{ComputeStrategy, compute_field_using};
pub use crate::core::actions::compute_field::ports::escape_time_algorithm::EscapeTimeAlgorithm;
pub use crate::core::actions::progress::{NoProgress, ProgressSink};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_field::{FieldError, IterationField, SENTINEL};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
