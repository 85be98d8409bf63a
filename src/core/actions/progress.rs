/// Receives the fraction of rows started, in `[0, 1)`, in non-decreasing order.
pub trait ProgressSink: Send + Sync {
    fn report(&self, fraction: f64);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn report(&self, _fraction: f64) {}
}

impl<F> ProgressSink for F
where
    F: Fn(f64) + Send + Sync,
{
    #[inline]
    fn report(&self, fraction: f64) {
        self(fraction)
    }
}
