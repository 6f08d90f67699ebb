//! Caller-side debouncing of query changes
//!
//! Rapid edits (keystrokes in the search box) are coalesced so the engine
//! runs once per pause rather than once per event. The engine itself stays
//! synchronous; only this wrapper touches the clock.

use std::time::Duration;

use tokio::sync::mpsc;

/// Window used when the configuration does not set one
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Creates a connected sender and debouncer pair
pub fn debounce<T>(window: Duration) -> (DebounceSender<T>, Debouncer<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DebounceSender { tx }, Debouncer { rx, window })
}

/// Submits values to a debouncer
#[derive(Debug)]
pub struct DebounceSender<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> Clone for DebounceSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> DebounceSender<T> {
    /// Submits a value. Returns false once the debouncer is gone.
    pub fn send(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// Yields the latest value after a quiet period
#[derive(Debug)]
pub struct Debouncer<T> {
    rx: mpsc::UnboundedReceiver<T>,
    window: Duration,
}

impl<T> Debouncer<T> {
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Waits for a value, then keeps replacing it with newer ones until no
    /// new value arrives for a full window.
    ///
    /// Returns `None` once every sender is dropped and nothing is pending.
    /// A value still pending when the senders drop is flushed immediately.
    pub async fn next_settled(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;

        loop {
            match tokio::time::timeout(self.window, self.rx.recv()).await {
                Ok(Some(value)) => latest = value,
                Ok(None) | Err(_) => return Some(latest),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_to_last() {
        let (tx, mut debouncer) = debounce(Duration::from_millis(300));

        tokio::spawn(async move {
            for term in ["c", "cl", "cle", "clea", "clean"] {
                tx.send(term.to_string());
                sleep(Duration::from_millis(50)).await;
            }
            sleep(Duration::from_secs(2)).await;
        });

        assert_eq!(debouncer.next_settled().await.as_deref(), Some("clean"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_pauses_yield_separately() {
        let (tx, mut debouncer) = debounce(Duration::from_millis(300));

        tokio::spawn(async move {
            tx.send(1);
            sleep(Duration::from_millis(500)).await;
            tx.send(2);
            tx.send(3);
            sleep(Duration::from_secs(2)).await;
        });

        assert_eq!(debouncer.next_settled().await, Some(1));
        assert_eq!(debouncer.next_settled().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_full_window() {
        let (tx, mut debouncer) = debounce(Duration::from_millis(400));
        let start = Instant::now();

        tx.send("a");
        let _keep_open = tx.clone();
        assert_eq!(debouncer.next_settled().await, Some("a"));
        assert!(start.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_closed_channel() {
        let (tx, mut debouncer) = debounce::<u8>(DEFAULT_WINDOW);
        tx.send(9);
        drop(tx);

        assert_eq!(debouncer.next_settled().await, Some(9));
        assert_eq!(debouncer.next_settled().await, None);
    }

    #[tokio::test]
    async fn test_send_after_debouncer_dropped() {
        let (tx, debouncer) = debounce::<u8>(DEFAULT_WINDOW);
        drop(debouncer);
        assert!(!tx.send(1));
    }
}
