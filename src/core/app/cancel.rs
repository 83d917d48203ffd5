//! Cancellation token for the sampling loop

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

/// One-shot cancellation token
///
/// Checked at the top of every sampling cycle and raced against the sleep.
/// Once cancelled it stays cancelled.
pub struct CancelToken<M: RawMutex> {
    cancelled: AtomicBool,
    signal: Signal<M, ()>,
}

impl<M: RawMutex> CancelToken<M> {
    /// Create a token that is not cancelled (const fn for static initialization)
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            signal: Signal::new(),
        }
    }

    /// Request cancellation and wake the waiting task
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.signal.signal(());
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Wait until cancellation is requested
    pub async fn wait(&self) {
        if self.is_cancelled() {
            return;
        }
        self.signal.wait().await;
    }
}

impl<M: RawMutex> Default for CancelToken<M> {
    fn default() -> Self {
        Self::new()
    }
}
