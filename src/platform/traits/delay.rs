//! Delay interface trait
//!
//! The scheduler's sleep primitive. The sampling task suspends here once per
//! cycle, which is its only voluntary yield point.

/// Async millisecond delay
#[allow(async_fn_in_trait)]
pub trait DelayMs {
    /// Suspend the calling task for at least `ms` milliseconds
    async fn delay_ms(&mut self, ms: u32);
}

/// Embassy timer-backed delay
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyDelay;

#[cfg(feature = "embassy")]
impl DelayMs for EmbassyDelay {
    async fn delay_ms(&mut self, ms: u32) {
        embassy_time::Timer::after_millis(u64::from(ms)).await;
    }
}
