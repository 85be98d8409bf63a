use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::field_event::FieldEvent;
use crate::controllers::interactive::ports::field_sink::FieldSink;
use crate::core::actions::compute_field::compute_strategy::{ComputeStrategy, compute_field_using};
use crate::core::data::viewport::Viewport;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace, warn};

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Viewport)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    strategy: ComputeStrategy,
    sink: Arc<dyn FieldSink>,
}

pub struct FieldWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl FieldWorker {
    pub fn new(sink: Arc<dyn FieldSink>, strategy: ComputeStrategy) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            strategy,
            sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `viewport` as the newest frame and returns its generation.
    ///
    /// Any older request still queued is replaced; one already running is
    /// cancelled at its next row boundary and never reaches the sink.
    pub fn submit_request(&self, viewport: Viewport) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, viewport));
        }

        trace!(generation, "field request queued");
        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("field worker thread panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, viewport) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let progress = |fraction: f64| {
                shared.sink.submit(FieldEvent::Progress {
                    generation: job_generation,
                    fraction,
                });
            };

            let start = Instant::now();
            let result = compute_field_using(shared.strategy, &viewport, &cancel_token, &progress);
            let compute_duration = start.elapsed();

            let Ok(field) = result else {
                debug!(generation = job_generation, "stale field request cancelled");
                continue;
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);

            shared.sink.submit(FieldEvent::Frame(FrameData {
                generation: job_generation,
                field,
                compute_duration,
            }));
        }
    }
}

impl Drop for FieldWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    use crate::core::data::complex::Complex;

    #[derive(Default)]
    struct MockFieldSink {
        events: Mutex<Vec<FieldEvent>>,
    }

    impl MockFieldSink {
        fn take_frames(&self) -> Vec<FrameData> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
                .into_iter()
                .filter_map(|event| match event {
                    FieldEvent::Frame(frame) => Some(frame),
                    FieldEvent::Progress { .. } => None,
                })
                .collect()
        }
    }

    impl FieldSink for MockFieldSink {
        fn submit(&self, event: FieldEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    /// Holds the first progress report of generation 1 until released.
    struct GatedFieldSink {
        inner: MockFieldSink,
        entered: Mutex<Option<mpsc::Sender<()>>>,
        release: Mutex<mpsc::Receiver<()>>,
    }

    impl FieldSink for GatedFieldSink {
        fn submit(&self, event: FieldEvent) {
            if let FieldEvent::Progress { generation: 1, .. } = event {
                if let Some(entered) = self.entered.lock().unwrap().take() {
                    let _ = entered.send(());
                    let _ = self
                        .release
                        .lock()
                        .unwrap()
                        .recv_timeout(Duration::from_secs(5));
                }
            }
            self.inner.submit(event);
        }
    }

    fn wait_for_frames(sink: &MockFieldSink, timeout: Duration) -> Vec<FrameData> {
        let start = Instant::now();
        loop {
            let frames = sink.take_frames();
            if !frames.is_empty() || start.elapsed() >= timeout {
                return frames;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn test_viewport() -> Viewport {
        Viewport::new(Complex::new(-0.5, 0.0), 3.0, 2.0, 4, 4, 10)
    }

    #[test]
    fn test_submit_request_emits_frame() {
        let sink = Arc::new(MockFieldSink::default());
        let mut worker = FieldWorker::new(
            Arc::clone(&sink) as Arc<dyn FieldSink>,
            ComputeStrategy::ParallelRayon,
        );

        let generation = worker.submit_request(test_viewport());
        let frames = wait_for_frames(sink.as_ref(), Duration::from_secs(2));

        assert_eq!(frames.len(), 1, "expected exactly one frame");
        assert_eq!(frames[0].generation, generation);
        assert!(generation > 0, "generation should be non-zero");
        assert_eq!(frames[0].field.len(), 16);

        worker.shutdown();
    }

    #[test]
    fn test_progress_events_precede_frame() {
        let sink = Arc::new(MockFieldSink::default());
        let mut worker =
            FieldWorker::new(Arc::clone(&sink) as Arc<dyn FieldSink>, ComputeStrategy::Serial);

        worker.submit_request(test_viewport());
        let start = Instant::now();
        while worker.last_completed_generation() == 0 && start.elapsed() < Duration::from_secs(2) {
            thread::sleep(Duration::from_millis(10));
        }
        worker.shutdown();

        let events = std::mem::take(&mut *sink.events.lock().unwrap());
        let fractions: Vec<f64> = events
            .iter()
            .filter_map(|event| match event {
                FieldEvent::Progress { fraction, .. } => Some(*fraction),
                FieldEvent::Frame(_) => None,
            })
            .collect();

        assert_eq!(fractions, vec![0.0, 0.25, 0.5, 0.75]);
        assert!(matches!(events.last(), Some(FieldEvent::Frame(_))));
    }

    #[test]
    fn test_generation_ids_increment() {
        let sink = Arc::new(MockFieldSink::default());
        let mut worker = FieldWorker::new(
            Arc::clone(&sink) as Arc<dyn FieldSink>,
            ComputeStrategy::ParallelRayon,
        );

        worker.submit_request(test_viewport());
        let frames_a = wait_for_frames(sink.as_ref(), Duration::from_secs(2));
        assert!(!frames_a.is_empty(), "expected frames from request A");

        worker.submit_request(test_viewport().zoomed_about(2.0));
        let frames_b = wait_for_frames(sink.as_ref(), Duration::from_secs(2));
        assert!(!frames_b.is_empty(), "expected frames from request B");

        assert!(
            frames_b[0].generation > frames_a[0].generation,
            "Generation B ({}) should be greater than A ({})",
            frames_b[0].generation,
            frames_a[0].generation
        );

        worker.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let sink = Arc::new(MockFieldSink::default());
        let mut worker =
            FieldWorker::new(Arc::clone(&sink) as Arc<dyn FieldSink>, ComputeStrategy::Serial);

        assert_eq!(worker.last_completed_generation(), 0);

        worker.shutdown();
    }

    #[test]
    fn test_last_completed_generation_updates_after_frame_completion() {
        let sink = Arc::new(MockFieldSink::default());
        let mut worker =
            FieldWorker::new(Arc::clone(&sink) as Arc<dyn FieldSink>, ComputeStrategy::Serial);

        let submitted_generation = worker.submit_request(test_viewport());
        let frames = wait_for_frames(sink.as_ref(), Duration::from_secs(2));
        assert!(!frames.is_empty(), "expected a frame");

        assert_eq!(frames[0].generation, submitted_generation);
        assert_eq!(worker.last_completed_generation(), submitted_generation);

        worker.shutdown();
    }

    #[test]
    fn test_newer_request_cancels_stale_computation() {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let sink = Arc::new(GatedFieldSink {
            inner: MockFieldSink::default(),
            entered: Mutex::new(Some(entered_tx)),
            release: Mutex::new(release_rx),
        });
        let mut worker =
            FieldWorker::new(Arc::clone(&sink) as Arc<dyn FieldSink>, ComputeStrategy::Serial);

        let stale = worker.submit_request(test_viewport());
        entered_rx.recv_timeout(Duration::from_secs(5)).unwrap();

        let fresh = worker.submit_request(test_viewport().zoomed_about(4.0));
        release_tx.send(()).unwrap();

        let frames = wait_for_frames(&sink.inner, Duration::from_secs(2));

        assert_eq!(stale, 1);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].generation, fresh);
        assert_eq!(worker.last_completed_generation(), fresh);

        worker.shutdown();
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let sink = Arc::new(MockFieldSink::default());
        let mut worker =
            FieldWorker::new(Arc::clone(&sink) as Arc<dyn FieldSink>, ComputeStrategy::Serial);

        worker.shutdown();
        worker.shutdown();

        assert!(sink.take_frames().is_empty());
    }
}
