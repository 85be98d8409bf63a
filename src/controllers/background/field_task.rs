use std::sync::Arc;
use std::thread::{self, JoinHandle};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::actions::cancellation::{CancellationFlag, Cancelled};
use crate::core::actions::compute_field::compute_strategy::{ComputeStrategy, compute_field_using};
use crate::core::actions::progress::ProgressSink;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("field worker thread panicked")]
    WorkerPanicked,
}

/// Handle to an escape field being computed on its own thread.
///
/// Dropping a task that has not been joined cancels it.
pub struct FieldTask {
    cancel: CancellationFlag,
    handle: Option<JoinHandle<Result<IterationField, Cancelled>>>,
}

/// Starts computing `viewport` on a dedicated thread and returns immediately.
///
/// `progress` is invoked from the worker (and, for the rayon strategy, from pool
/// threads), never from the caller's thread.
pub fn spawn_compute(
    viewport: Viewport,
    strategy: ComputeStrategy,
    progress: Arc<dyn ProgressSink>,
) -> FieldTask {
    let cancel = CancellationFlag::new();
    let worker_cancel = cancel.clone();

    debug!(%strategy, "spawning escape field task");

    let handle = thread::spawn(move || {
        compute_field_using(strategy, &viewport, &worker_cancel, progress.as_ref())
    });

    FieldTask {
        cancel,
        handle: Some(handle),
    }
}

impl FieldTask {
    /// Requests cancellation; the worker stops at its next row boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn cancellation_flag(&self) -> CancellationFlag {
        self.cancel.clone()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Blocks until the worker finishes.
    pub fn join(mut self) -> Result<IterationField, ComputeError> {
        let Some(handle) = self.handle.take() else {
            return Err(ComputeError::WorkerPanicked);
        };

        match handle.join() {
            Ok(result) => Ok(result?),
            Err(_) => {
                warn!("escape field worker panicked");
                Err(ComputeError::WorkerPanicked)
            }
        }
    }
}

impl Drop for FieldTask {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cancel.cancel();
        }
    }
}
