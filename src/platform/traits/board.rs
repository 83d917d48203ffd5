//! Board services
//!
//! Reset-cause diagnostics, fault raising and task creation. These wrap the
//! board support package and the real-time scheduler.

use core::fmt;

use crate::core::app::AppError;

/// Cause of the most recent reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetCause {
    /// Cold start
    PowerOn,
    /// Supply voltage dropped below threshold
    Brownout,
    /// Watchdog expired
    Watchdog,
    /// Software-requested reset
    Software,
    /// Reset pin asserted
    External,
    /// Cause could not be determined
    Unknown,
}

impl fmt::Display for ResetCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResetCause::PowerOn => "power-on reset",
            ResetCause::Brownout => "brownout reset",
            ResetCause::Watchdog => "watchdog reset",
            ResetCause::Software => "software reset",
            ResetCause::External => "external pin reset",
            ResetCause::Unknown => "unknown reset",
        };
        f.write_str(s)
    }
}

/// Board diagnostics trait
///
/// `raise` forwards an error to the board's error handler (error LED, fault
/// log). It never halts; halting is the caller's decision.
pub trait BoardDiagnostics {
    /// Cause of the most recent reset
    fn reset_cause(&self) -> ResetCause;

    /// Report an error to the board's error handler
    fn raise(&mut self, error: &AppError);
}

/// Task creation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpawnError {
    /// Task pool or stack memory exhausted
    OutOfResources,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::OutOfResources => write!(f, "Task pool exhausted"),
        }
    }
}

/// Creates the periodic sampling task
///
/// Implementations hold whatever the task needs (sensor subsystem, sink,
/// cancellation token) and hand it to the scheduler.
pub trait SamplerSpawner {
    /// Create and start the sampling task
    ///
    /// # Errors
    ///
    /// Returns `SpawnError::OutOfResources` if the scheduler cannot create
    /// another task.
    fn spawn_sampler(&mut self) -> Result<(), SpawnError>;
}
