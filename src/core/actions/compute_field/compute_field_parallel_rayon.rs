use std::sync::Mutex;
use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::compute_field::compute_field::{compute_field_with, fill_row};
use crate::core::actions::compute_field::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::progress::ProgressSink;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Computes the Mandelbrot escape field with rows spread over rayon's pool.
///
/// Output is identical to [`compute_field`](super::compute_field::compute_field).
/// For cancellation and progress semantics see [`compute_field_parallel_rayon_with`].
pub fn compute_field_parallel_rayon<C, P>(
    viewport: &Viewport,
    cancel: &C,
    progress: &P,
) -> Result<IterationField, Cancelled>
where
    C: CancelToken + ?Sized,
    P: ProgressSink + ?Sized,
{
    let algorithm = MandelbrotAlgorithm::new(viewport.max_iterations());
    compute_field_parallel_rayon_with(&algorithm, viewport, cancel, progress)
}

/// Rayon-backed field generation over an arbitrary escape-time algorithm.
///
/// Each worker owns a disjoint row slice of the destination field, so the field
/// itself needs no locking. At the start of every row the number of rows started
/// so far is reported as a fraction of the height; reports are serialised through
/// a mutex so the sink always sees strictly increasing values, even though rows
/// may start out of order. The token is polled once per row; on cancellation the
/// remaining rows are abandoned and the partial field is dropped.
pub fn compute_field_parallel_rayon_with<Alg, C, P>(
    algorithm: &Alg,
    viewport: &Viewport,
    cancel: &C,
    progress: &P,
) -> Result<IterationField, Cancelled>
where
    Alg: EscapeTimeAlgorithm + Sync + ?Sized,
    C: CancelToken + ?Sized,
    P: ProgressSink + ?Sized,
{
    let rows = viewport.rows();
    let columns = viewport.columns();

    if columns == 0 {
        // no cells to share out; the serial walk still reports and polls per row
        return compute_field_with(algorithm, viewport, cancel, progress);
    }

    let start = Instant::now();
    let mut field = IterationField::new(viewport);
    let rows_started = Mutex::new(0usize);

    debug!(
        columns,
        rows,
        max_iterations = viewport.max_iterations(),
        threads = rayon::current_num_threads(),
        "computing escape field in parallel"
    );

    field
        .counts_mut()
        .par_chunks_mut(columns)
        .enumerate()
        .try_for_each(|(row, cells)| {
            {
                let mut started = rows_started.lock().unwrap_or_else(|e| e.into_inner());
                progress.report(*started as f64 / rows as f64);
                *started += 1;
            }

            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            fill_row(algorithm, viewport, row, cells);
            Ok(())
        })
        .inspect_err(|_| debug!("escape field computation cancelled"))?;

    debug!(elapsed = ?start.elapsed(), "escape field computed");

    Ok(field)
}
