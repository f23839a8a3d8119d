//! Debounce and throttle helpers.
//!
//! Both wrap a callback and drive it from tokio timers. Dropping either
//! wrapper aborts its pending timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Delays a callback until `wait` has passed without another call.
pub struct Debouncer<F> {
    callback: Arc<F>,
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<F> Debouncer<F>
where
    F: Fn() + Send + Sync + 'static,
{
    pub fn new(callback: F, wait: Duration) -> Self {
        Self {
            callback: Arc::new(callback),
            wait,
            pending: None,
        }
    }

    /// Restart the quiet period. The callback fires `wait` after the latest call.
    pub fn call(&mut self) {
        self.cancel();
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback();
        }));
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl<F> Drop for Debouncer<F> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[derive(Debug, Default)]
struct ThrottleState {
    last_run: Option<Instant>,
    trailing: Option<JoinHandle<()>>,
}

/// Runs a callback at most once per `wait`, keeping a single trailing call.
pub struct Throttler<F> {
    callback: Arc<F>,
    wait: Duration,
    state: Arc<Mutex<ThrottleState>>,
}

impl<F> Throttler<F>
where
    F: Fn() + Send + Sync + 'static,
{
    pub fn new(callback: F, wait: Duration) -> Self {
        Self {
            callback: Arc::new(callback),
            wait,
            state: Arc::new(Mutex::new(ThrottleState::default())),
        }
    }

    /// Fire now if the window has passed, otherwise schedule one trailing call.
    /// Calls made while a trailing call is pending are dropped.
    pub fn call(&self) {
        let Ok(mut state) = self.state.lock() else {
            tracing::warn!("Throttle state poisoned, dropping call");
            return;
        };

        if state
            .trailing
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
        {
            return;
        }

        let now = Instant::now();
        let elapsed = state.last_run.map(|t| now.duration_since(t));
        match elapsed {
            Some(elapsed) if elapsed < self.wait => {
                let delay = self.wait - elapsed;
                let callback = Arc::clone(&self.callback);
                let shared = Arc::clone(&self.state);
                state.trailing = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    // Free the slot first so calls made by the callback are kept
                    if let Ok(mut state) = shared.lock() {
                        state.last_run = Some(Instant::now());
                        state.trailing = None;
                    }
                    callback();
                }));
            }
            _ => {
                state.last_run = Some(now);
                drop(state);
                (self.callback)();
            }
        }
    }
}

impl<F> Drop for Throttler<F> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            if let Some(handle) = state.trailing.take() {
                handle.abort();
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::OnceLock;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    async fn settle(d: Duration) {
        tokio::time::sleep(d).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_burst_fires_once_after_last_call() {
        let (count, f) = counter();
        let mut debounced = Debouncer::new(f, Duration::from_millis(100));

        for _ in 0..5 {
            debounced.call();
            settle(Duration::from_millis(30)).await;
        }
        // Last call was 30ms ago
        assert_eq!(count.load(Ordering::SeqCst), 0);

        settle(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        settle(Duration::from_millis(20)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        settle(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!debounced.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_separate_bursts() {
        let (count, f) = counter();
        let mut debounced = Debouncer::new(f, Duration::from_millis(50));

        debounced.call();
        settle(Duration::from_millis(80)).await;
        debounced.call();
        settle(Duration::from_millis(80)).await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_cancel_and_drop() {
        let (count, f) = counter();
        let mut debounced = Debouncer::new(f, Duration::from_millis(50));
        debounced.call();
        assert!(debounced.is_pending());
        debounced.cancel();
        settle(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        debounced.call();
        drop(debounced);
        settle(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_leading_and_single_trailing() {
        let (count, f) = counter();
        let throttled = Throttler::new(f, Duration::from_millis(100));

        throttled.call();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Within the window: one trailing call, the rest dropped
        settle(Duration::from_millis(10)).await;
        throttled.call();
        throttled.call();
        throttled.call();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        settle(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        settle(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_keeps_call_made_from_trailing_callback() {
        type Boxed = Box<dyn Fn() + Send + Sync>;

        let count = Arc::new(AtomicUsize::new(0));
        let slot: Arc<OnceLock<Arc<Throttler<Boxed>>>> = Arc::new(OnceLock::new());
        let (inner_count, inner_slot) = (Arc::clone(&count), Arc::clone(&slot));
        let callback: Boxed = Box::new(move || {
            // The trailing run asks for one more step
            if inner_count.fetch_add(1, Ordering::SeqCst) == 1 {
                if let Some(throttled) = inner_slot.get() {
                    throttled.call();
                }
            }
        });
        let throttled = Arc::new(Throttler::new(callback, Duration::from_millis(100)));
        assert!(slot.set(Arc::clone(&throttled)).is_ok());

        throttled.call();
        throttled.call();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        settle(Duration::from_millis(110)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        settle(Duration::from_millis(110)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_after_window_fires_immediately() {
        let (count, f) = counter();
        let throttled = Throttler::new(f, Duration::from_millis(50));

        throttled.call();
        settle(Duration::from_millis(60)).await;
        throttled.call();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
