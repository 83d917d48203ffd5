//! Application error types
//!
//! Errors are split by policy: a [`FatalError`] stops the system during
//! bring-up, a [`TransientError`] only degrades one sampling cycle.

use core::fmt;

use super::controller::BringUpState;
use super::queue::{Command, QueueError};
use crate::core::config::ConfigError;
use crate::devices::traits::SensorHandle;
use crate::platform::traits::SpawnError;
use crate::platform::{ErrorCode, ErrorReason};

/// Unrecoverable bring-up errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FatalError {
    /// No command queue was provided at init
    NullQueueHandle,
    /// Init was called after bring-up had already started
    AlreadyInitialized {
        /// State at the time of the call
        state: BringUpState,
    },
    /// A bring-up phase could not be queued
    Enqueue {
        /// Command that was rejected
        command: Command,
        /// Queue failure
        error: QueueError,
    },
    /// Sensor setup rejected before reaching the sensor subsystem
    InvalidConfig(ConfigError),
    /// Sensor subsystem configuration failed
    SensorSetup(ErrorCode),
    /// Sensor subsystem enable failed
    SensorEnable(ErrorCode),
    /// Sampling task could not be created
    SamplerSpawn(SpawnError),
    /// Sampling task already exists
    SamplerAlreadyStarted,
    /// Virtual sensor handle initialisation failed
    HandleInit {
        /// Handle that failed
        handle: SensorHandle,
        /// Status returned by the sensor subsystem
        code: ErrorCode,
    },
    /// A bring-up command arrived in the wrong state
    UnexpectedCommand {
        /// State at the time of dispatch
        state: BringUpState,
        /// Command received
        command: Command,
    },
}

impl FatalError {
    /// Status code raised to the board's error handler
    pub fn code(&self) -> ErrorCode {
        match self {
            FatalError::NullQueueHandle => ErrorCode::error(ErrorReason::NullPointer),
            FatalError::AlreadyInitialized { .. } | FatalError::UnexpectedCommand { .. } => {
                ErrorCode::error(ErrorReason::Failure)
            }
            FatalError::Enqueue { .. } | FatalError::SamplerSpawn(_) => {
                ErrorCode::error(ErrorReason::OutOfResources)
            }
            FatalError::InvalidConfig(_) => ErrorCode::error(ErrorReason::InvalidParam),
            FatalError::SensorSetup(code) | FatalError::SensorEnable(code) => *code,
            FatalError::SamplerAlreadyStarted => ErrorCode::error(ErrorReason::Failure),
            // Handle failures are escalated as resource errors regardless of the cause
            FatalError::HandleInit { .. } => ErrorCode::error(ErrorReason::OutOfResources),
        }
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::NullQueueHandle => write!(f, "Command queue handle is missing"),
            FatalError::AlreadyInitialized { state } => {
                write!(f, "Bring-up already started (state: {})", state)
            }
            FatalError::Enqueue { command, error } => {
                write!(f, "Failed to queue {}: {}", command, error)
            }
            FatalError::InvalidConfig(e) => write!(f, "Invalid sensor setup: {}", e),
            FatalError::SensorSetup(code) => write!(f, "Sensor setup failed: {}", code),
            FatalError::SensorEnable(code) => write!(f, "Sensor enable failed: {}", code),
            FatalError::SamplerSpawn(e) => write!(f, "Sampling task creation failed: {}", e),
            FatalError::SamplerAlreadyStarted => write!(f, "Sampling task already started"),
            FatalError::HandleInit { handle, code } => {
                write!(f, "Failed to initialize the {}: {}", handle, code)
            }
            FatalError::UnexpectedCommand { state, command } => {
                write!(f, "Unexpected {} in state {}", command, state)
            }
        }
    }
}

/// Per-cycle sampling errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransientError {
    /// A sensor read failed
    Read {
        /// Quantity that failed
        handle: SensorHandle,
        /// Status returned by the sensor subsystem
        code: ErrorCode,
    },
}

impl TransientError {
    /// Status code raised to the board's error handler
    pub fn code(&self) -> ErrorCode {
        match self {
            TransientError::Read { code, .. } => *code,
        }
    }
}

impl fmt::Display for TransientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransientError::Read { handle, code } => {
                write!(f, "Read of {} failed: {}", handle, code)
            }
        }
    }
}

/// Any application error, tagged by policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppError {
    /// Stops the system
    Fatal(FatalError),
    /// Logged and skipped
    Transient(TransientError),
}

impl AppError {
    /// Check if this error stops the system
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Fatal(_))
    }

    /// Status code raised to the board's error handler
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Fatal(e) => e.code(),
            AppError::Transient(e) => e.code(),
        }
    }
}

impl From<FatalError> for AppError {
    fn from(e: FatalError) -> Self {
        AppError::Fatal(e)
    }
}

impl From<TransientError> for AppError {
    fn from(e: TransientError) -> Self {
        AppError::Transient(e)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fatal(e) => write!(f, "fatal: {}", e),
            AppError::Transient(e) => write!(f, "transient: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Severity;
    use std::format;

    #[test]
    fn test_handle_init_reports_out_of_resources() {
        let err = FatalError::HandleInit {
            handle: SensorHandle::Orientation,
            code: ErrorCode::error(ErrorReason::BusFailure),
        };
        assert_eq!(err.code(), ErrorCode::error(ErrorReason::OutOfResources));
        assert_eq!(
            format!("{}", err),
            "Failed to initialize the OrientationSensor: bus failure (error)"
        );
    }

    #[test]
    fn test_null_queue_reports_null_pointer() {
        assert_eq!(
            FatalError::NullQueueHandle.code().reason,
            ErrorReason::NullPointer
        );
    }

    #[test]
    fn test_sensor_failures_keep_collaborator_code() {
        let code = ErrorCode::new(Severity::Fatal, ErrorReason::Timeout);
        assert_eq!(FatalError::SensorEnable(code).code(), code);
    }

    #[test]
    fn test_app_error_tagging() {
        let fatal: AppError = FatalError::SamplerAlreadyStarted.into();
        let transient: AppError = TransientError::Read {
            handle: SensorHandle::CalibratedGyroscope,
            code: ErrorCode::error(ErrorReason::Timeout),
        }
        .into();

        assert!(fatal.is_fatal());
        assert!(!transient.is_fatal());
        assert_eq!(transient.code().reason, ErrorReason::Timeout);
    }
}
