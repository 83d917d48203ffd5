//! Platform abstraction traits
//!
//! This module defines the traits that collaborator implementations must provide.

pub mod board;
pub mod delay;
pub mod sensor;
pub mod serial;

// Re-export trait interfaces
pub use board::{BoardDiagnostics, ResetCause, SamplerSpawner, SpawnError};
#[cfg(feature = "embassy")]
pub use delay::EmbassyDelay;
pub use delay::DelayMs;
pub use sensor::SensorSubsystem;
pub use serial::SerialSink;
