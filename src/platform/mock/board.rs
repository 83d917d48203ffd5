//! Mock board services for testing

use std::vec::Vec;

use crate::core::app::AppError;
use crate::platform::traits::{BoardDiagnostics, ResetCause, SamplerSpawner, SpawnError};

/// Mock board diagnostics
///
/// Records every raised error instead of driving the error LED.
#[derive(Debug)]
pub struct MockBoard {
    reset_cause: ResetCause,
    raised: Vec<AppError>,
}

impl MockBoard {
    /// Create a mock board reporting a power-on reset
    pub fn new() -> Self {
        Self::with_reset_cause(ResetCause::PowerOn)
    }

    /// Create a mock board reporting `cause`
    pub fn with_reset_cause(cause: ResetCause) -> Self {
        Self {
            reset_cause: cause,
            raised: Vec::new(),
        }
    }

    /// Errors raised so far, in order
    pub fn raised(&self) -> &[AppError] {
        &self.raised
    }

    /// Number of fatal errors raised
    pub fn fatal_count(&self) -> usize {
        self.raised.iter().filter(|e| e.is_fatal()).count()
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardDiagnostics for MockBoard {
    fn reset_cause(&self) -> ResetCause {
        self.reset_cause
    }

    fn raise(&mut self, error: &AppError) {
        self.raised.push(*error);
    }
}

/// Mock sampling task spawner
///
/// Counts spawn requests; nothing is actually scheduled.
#[derive(Debug, Default)]
pub struct MockSpawner {
    spawned: usize,
    fail: bool,
}

impl MockSpawner {
    /// Create a spawner that always succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a spawner that always reports exhausted resources
    pub fn failing() -> Self {
        Self {
            spawned: 0,
            fail: true,
        }
    }

    /// Number of successful spawns
    pub fn spawn_count(&self) -> usize {
        self.spawned
    }
}

impl SamplerSpawner for MockSpawner {
    fn spawn_sampler(&mut self) -> Result<(), SpawnError> {
        if self.fail {
            return Err(SpawnError::OutOfResources);
        }
        self.spawned += 1;
        Ok(())
    }
}
