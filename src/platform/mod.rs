//! Platform abstraction layer
//!
//! This module isolates the external collaborators of the application: the
//! vendor sensor layer, the serial sink, the scheduler's delay and task
//! creation primitives, and board diagnostics.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(feature = "sim")]
pub mod sim;

// Re-export commonly used types
pub use error::{ErrorCode, ErrorReason, PlatformError, Result, Severity};
pub use traits::{
    BoardDiagnostics, DelayMs, ResetCause, SamplerSpawner, SensorSubsystem, SerialSink,
    SpawnError,
};
