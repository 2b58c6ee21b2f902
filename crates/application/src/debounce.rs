//! Input debouncing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Lets only the last of a burst of calls through.
///
/// Each call to `settle` waits out the window and reports whether no newer
/// call (or `cancel`) happened in the meantime.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: AtomicU64,
}

impl Debouncer {
    /// Creates an idle debouncer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
        }
    }

    /// Waits for `window` and returns true if this call is still the latest.
    pub async fn settle(&self, window: Duration) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(window).await;
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Invalidates every pending `settle`.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
