use std::time::Instant;

use tracing::debug;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::compute_field::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::progress::ProgressSink;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Computes the Mandelbrot escape field for `viewport` one row at a time.
///
/// Before each row the fraction `row / pixel_height` is reported and the token is
/// checked; a cancelled run returns [`Cancelled`] and drops the partial field.
pub fn compute_field<C, P>(
    viewport: &Viewport,
    cancel: &C,
    progress: &P,
) -> Result<IterationField, Cancelled>
where
    C: CancelToken + ?Sized,
    P: ProgressSink + ?Sized,
{
    let algorithm = MandelbrotAlgorithm::new(viewport.max_iterations());
    compute_field_with(&algorithm, viewport, cancel, progress)
}

pub fn compute_field_with<Alg, C, P>(
    algorithm: &Alg,
    viewport: &Viewport,
    cancel: &C,
    progress: &P,
) -> Result<IterationField, Cancelled>
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    C: CancelToken + ?Sized,
    P: ProgressSink + ?Sized,
{
    let start = Instant::now();
    let rows = viewport.rows();
    let columns = viewport.columns();
    let mut field = IterationField::new(viewport);

    debug!(
        columns,
        rows,
        max_iterations = viewport.max_iterations(),
        "computing escape field serially"
    );

    // rows are visited even when they hold no cells
    for row in 0..rows {
        progress.report(row as f64 / rows as f64);

        if cancel.is_cancelled() {
            debug!(row, "escape field computation cancelled");
            return Err(Cancelled);
        }

        let cells = &mut field.counts_mut()[row * columns..(row + 1) * columns];
        fill_row(algorithm, viewport, row, cells);
    }

    debug!(elapsed = ?start.elapsed(), "escape field computed");

    Ok(field)
}

pub(crate) fn fill_row<Alg>(algorithm: &Alg, viewport: &Viewport, row: usize, cells: &mut [i32])
where
    Alg: EscapeTimeAlgorithm + ?Sized,
{
    for (column, cell) in cells.iter_mut().enumerate() {
        *cell = algorithm.classify(viewport.pixel_to_complex(column, row));
    }
}
