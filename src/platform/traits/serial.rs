//! Serial sink interface
//!
//! This module defines the console output the sampling task writes to.

use crate::platform::Result;

/// Serial sink trait
///
/// Line-oriented text output (UART or USB console).
///
/// # Safety Invariants
///
/// - Only one writer per sink instance
/// - Writes are delivered in call order
pub trait SerialSink {
    /// Write data to the sink
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::WriteFailed` or `PlatformError::Overrun` if
    /// the data could not be queued.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Flush pending output
    fn flush(&mut self) -> Result<()>;
}
