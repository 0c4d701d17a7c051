use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

/// Cooperative cancellation handle for long simulation runs. Cheap to
/// clone across threads; checked between trials. Abandoning a run leaves
/// the counts already accumulated intact, so a partial estimate stays
/// valid, just noisier.
#[derive(Debug, Clone, Default)]
pub struct Cutoff {
    tripped: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Cutoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cutoff that trips on its own once the time budget elapses.
    pub fn after(budget: Duration) -> Self {
        Self {
            tripped: Arc::default(),
            deadline: Some(Instant::now() + budget),
        }
    }

    /// Request cancellation. Callable from any thread.
    pub fn trip(&self) {
        self.tripped.store(true, Ordering::Relaxed);
    }

    pub fn tripped(&self) -> bool {
        self.tripped.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
