//! Console-backed board services for the simulation

use std::io::{self, Write};

use crate::core::app::AppError;
use crate::platform::error::PlatformError;
use crate::platform::traits::{BoardDiagnostics, ResetCause, SerialSink};
use crate::platform::Result;
use crate::{log_error, log_warn};

/// Serial sink writing to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a sink on the process's standard output
    pub fn new() -> Self {
        Self
    }
}

impl SerialSink for StdoutSink {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        io::stdout()
            .lock()
            .write_all(data)
            .map_err(|_| PlatformError::WriteFailed)?;
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush().map_err(|_| PlatformError::WriteFailed)
    }
}

/// Board diagnostics that report through the log
#[derive(Debug, Clone, Copy)]
pub struct SimDiagnostics {
    reset_cause: ResetCause,
    raised: u32,
}

impl SimDiagnostics {
    /// Diagnostics reporting `reset_cause`
    pub fn new(reset_cause: ResetCause) -> Self {
        Self {
            reset_cause,
            raised: 0,
        }
    }

    /// Number of errors raised so far
    pub fn raised(&self) -> u32 {
        self.raised
    }
}

impl Default for SimDiagnostics {
    fn default() -> Self {
        Self::new(ResetCause::PowerOn)
    }
}

impl BoardDiagnostics for SimDiagnostics {
    fn reset_cause(&self) -> ResetCause {
        self.reset_cause
    }

    fn raise(&mut self, error: &AppError) {
        self.raised = self.raised.wrapping_add(1);
        if error.is_fatal() {
            log_error!("Board error handler: {} ({})", error, error.code());
        } else {
            log_warn!("Board error handler: {} ({})", error, error.code());
        }
    }
}
