//! Mock delay implementation for testing

use embassy_sync::blocking_mutex::raw::{NoopRawMutex, RawMutex};
use std::vec::Vec;

use crate::core::app::CancelToken;
use crate::platform::traits::DelayMs;

/// Mock delay
///
/// Completes immediately and records every requested delay. It can cancel a
/// token after a number of delays so that an endless loop under test stops
/// deterministically.
pub struct MockDelay<'a, M: RawMutex = NoopRawMutex> {
    delays: Vec<u32>,
    stop: Option<(usize, &'a CancelToken<M>)>,
}

impl MockDelay<'static, NoopRawMutex> {
    /// Create a mock delay that never cancels
    pub fn new() -> Self {
        Self {
            delays: Vec::new(),
            stop: None,
        }
    }
}

impl Default for MockDelay<'static, NoopRawMutex> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, M: RawMutex> MockDelay<'a, M> {
    /// Create a mock delay that cancels `token` during its `count`-th delay
    pub fn cancelling_after(count: usize, token: &'a CancelToken<M>) -> Self {
        Self {
            delays: Vec::new(),
            stop: Some((count, token)),
        }
    }

    /// Requested delays in call order
    pub fn delays(&self) -> &[u32] {
        &self.delays
    }

    /// Sum of requested delays in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.delays.iter().map(|&ms| u64::from(ms)).sum()
    }
}

impl<M: RawMutex> DelayMs for MockDelay<'_, M> {
    async fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        if let Some((count, token)) = self.stop {
            if self.delays.len() >= count {
                token.cancel();
            }
        }
    }
}
