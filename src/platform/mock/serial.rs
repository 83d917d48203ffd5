//! Mock serial sink implementation for testing

use crate::platform::{error::PlatformError, traits::SerialSink, Result};
use std::string::String;
use std::vec::Vec;

/// Mock serial sink
///
/// Captures written bytes in memory so tests can check the exact output.
///
/// # Example
///
/// ```
/// use xdk_stream::platform::mock::MockSerial;
/// use xdk_stream::platform::traits::SerialSink;
///
/// let mut sink = MockSerial::new();
/// sink.write(b"1.0 0.0\n").unwrap();
/// assert_eq!(sink.output(), "1.0 0.0\n");
/// ```
#[derive(Debug, Default)]
pub struct MockSerial {
    tx_buffer: Vec<u8>,
    writes: usize,
    flushes: usize,
    fail_writes: bool,
}

impl MockSerial {
    /// Create a new mock sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Get written data (for test verification)
    pub fn tx_buffer(&self) -> &[u8] {
        &self.tx_buffer
    }

    /// Written data as text
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.tx_buffer).into_owned()
    }

    /// Clear transmit buffer
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Number of successful write calls
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Number of flush calls
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Make subsequent writes fail with `WriteFailed`
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl SerialSink for MockSerial {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.fail_writes {
            return Err(PlatformError::WriteFailed);
        }
        self.tx_buffer.extend_from_slice(data);
        self.writes += 1;
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_serial_write() {
        let mut sink = MockSerial::new();
        let written = sink.write(b"0.0 0.0 9.8 ").unwrap();
        assert_eq!(written, 12);
        sink.write(b"0.1 0.0 0.0\n").unwrap();
        assert_eq!(sink.output(), "0.0 0.0 9.8 0.1 0.0 0.0\n");
        assert_eq!(sink.write_count(), 2);
    }

    #[test]
    fn test_mock_serial_failure() {
        let mut sink = MockSerial::new();
        sink.set_fail_writes(true);
        assert_eq!(sink.write(b"x"), Err(PlatformError::WriteFailed));
        assert!(sink.tx_buffer().is_empty());
    }
}
