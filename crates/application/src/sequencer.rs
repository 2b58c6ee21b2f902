//! Request sequencing.

use std::sync::atomic::{AtomicU64, Ordering};

use holocron_domain::RequestToken;

/// Issues monotonically increasing request tokens.
///
/// Every list request takes a token before it is sent. The catalog state
/// remembers the latest token and ignores outcomes carrying an older one.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    last: AtomicU64,
}

impl RequestSequencer {
    /// Creates a sequencer whose first token is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Issues the next token.
    pub fn issue(&self) -> RequestToken {
        RequestToken::new(self.last.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_tokens_increase() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert_eq!(first, RequestToken::new(1));
        assert!(second > first);
        assert_eq!(sequencer.issue(), RequestToken::new(3));
    }

    #[tokio::test]
    async fn test_tokens_unique_across_tasks() {
        let sequencer = Arc::new(RequestSequencer::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let sequencer = Arc::clone(&sequencer);
            handles.push(tokio::spawn(async move {
                (0..100).map(|_| sequencer.issue()).collect::<Vec<_>>()
            }));
        }

        let mut all = Vec::new();
        for handle in handles {
            all.extend(handle.await.expect("task panicked"));
        }
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 800);
        assert_eq!(all.last(), Some(&RequestToken::new(800)));
    }
}
