//! Platform error types
//!
//! This module defines the status values returned by the external
//! collaborators (sensor layer, serial sink, task creation).

use core::fmt;

/// Result type for sink operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Severity attached to a collaborator status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    /// Informational, operation may be retried
    Info,
    /// Degraded but usable
    Warning,
    /// Operation failed
    Error,
    /// Unrecoverable
    Fatal,
}

/// Reason attached to a collaborator status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorReason {
    /// Generic failure
    Failure,
    /// A required handle or pointer was missing
    NullPointer,
    /// Task, queue or memory exhausted
    OutOfResources,
    /// Sensor or handle used before initialisation
    NotInitialized,
    /// Invalid parameter or configuration
    InvalidParam,
    /// Bus (I2C/SPI) transaction failed
    BusFailure,
    /// No data within the expected interval
    Timeout,
    /// Data failed validation
    InvalidData,
}

/// Collaborator status: a failed operation's severity and reason
///
/// Success is expressed as `Ok(..)` of the surrounding `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorCode {
    /// Severity of the failure
    pub severity: Severity,
    /// Reason for the failure
    pub reason: ErrorReason,
}

impl ErrorCode {
    /// Create a new status code
    pub const fn new(severity: Severity, reason: ErrorReason) -> Self {
        Self { severity, reason }
    }

    /// Error-severity status with the given reason
    pub const fn error(reason: ErrorReason) -> Self {
        Self::new(Severity::Error, reason)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorReason::Failure => "failure",
            ErrorReason::NullPointer => "null pointer",
            ErrorReason::OutOfResources => "out of resources",
            ErrorReason::NotInitialized => "not initialized",
            ErrorReason::InvalidParam => "invalid parameter",
            ErrorReason::BusFailure => "bus failure",
            ErrorReason::Timeout => "timeout",
            ErrorReason::InvalidData => "invalid data",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.reason, self.severity)
    }
}

/// Serial sink errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Write operation failed
    WriteFailed,
    /// Sink buffer full, data dropped
    Overrun,
    /// Sink not available
    ResourceUnavailable,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::WriteFailed => write!(f, "Serial write failed"),
            PlatformError::Overrun => write!(f, "Serial buffer overrun"),
            PlatformError::ResourceUnavailable => write!(f, "Serial sink not available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        let code = ErrorCode::error(ErrorReason::OutOfResources);
        assert_eq!(std::format!("{}", code), "out of resources (error)");
    }

    #[test]
    fn test_error_code_severity() {
        let code = ErrorCode::new(Severity::Warning, ErrorReason::Timeout);
        assert_eq!(std::format!("{}", code), "timeout (warning)");
        assert!(Severity::Warning < Severity::Fatal);
    }
}
