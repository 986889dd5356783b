/// Gets notified whenever another whole payload byte was hidden or recovered.
///
/// Observers only watch, they have no way to influence the codec.
pub trait ProgressObserver {
    fn on_progress(&mut self, done_bytes: u64, total_bytes: u64);
}

impl<F> ProgressObserver for F
where
    F: FnMut(u64, u64),
{
    fn on_progress(&mut self, done_bytes: u64, total_bytes: u64) {
        self(done_bytes, total_bytes)
    }
}

/// observer for callers that are not interested in progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _: u64, _: u64) {}
}
