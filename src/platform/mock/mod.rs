//! Mock collaborators for testing
//!
//! This module provides mock implementations of the platform traits that can
//! be used for unit testing without the board or its vendor SDK.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use xdk_stream::core::app::sample_cycle;
//! use xdk_stream::devices::traits::QuaternionSample;
//! use xdk_stream::platform::mock::MockSensors;
//!
//! let sensors = MockSensors::new();
//! sensors.push_quaternion(Ok(QuaternionSample::identity()));
//! let report = sample_cycle(&sensors);
//! assert!(report.line.starts_with("1.0 0.0 0.0 0.0 "));
//! ```

#![cfg(any(test, feature = "mock"))]

mod board;
mod delay;
mod queue;
mod sensor;
mod serial;

pub use board::{MockBoard, MockSpawner};
pub use delay::MockDelay;
pub use queue::MockCommandQueue;
pub use sensor::{MockCall, MockSensors};
pub use serial::MockSerial;
