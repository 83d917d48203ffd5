//! Sensor subsystem interface
//!
//! This module defines the interface to the vendor sensor layer, which owns
//! the physical sensor drivers and the fusion algorithms producing the
//! virtual sensor outputs.

use crate::core::config::SensorSetup;
use crate::devices::traits::{
    AngularRateSample, LinearAccelerationSample, QuaternionSample, SensorHandle,
};
use crate::platform::ErrorCode;

/// Sensor subsystem trait
///
/// The vendor layer keeps its own global state, so every method takes `&self`
/// and the subsystem can be shared between the bring-up sequencer and the
/// sampling task.
///
/// # Safety Invariants
///
/// - `configure` must succeed before `enable`
/// - `enable` must succeed before any `init_handle`
/// - A handle must be initialised before its read method is called
/// - Reads are blocking for a bounded, short duration
pub trait SensorSubsystem {
    /// Configure the physical sensors
    ///
    /// Sensors disabled in the setup's enable set are left untouched; their
    /// configuration entries have no effect.
    fn configure(&self, setup: &SensorSetup) -> Result<(), ErrorCode>;

    /// Power up and start the configured sensors
    fn enable(&self) -> Result<(), ErrorCode>;

    /// Initialise one virtual sensor handle
    fn init_handle(&self, handle: SensorHandle) -> Result<(), ErrorCode>;

    /// Read the orientation quaternion
    fn read_quaternion(&self) -> Result<QuaternionSample, ErrorCode>;

    /// Read linear acceleration in m/s²
    fn read_linear_acceleration(&self) -> Result<LinearAccelerationSample, ErrorCode>;

    /// Read calibrated angular rate in rad/s
    fn read_calibrated_gyro(&self) -> Result<AngularRateSample, ErrorCode>;
}

impl<T: SensorSubsystem + ?Sized> SensorSubsystem for &T {
    fn configure(&self, setup: &SensorSetup) -> Result<(), ErrorCode> {
        (**self).configure(setup)
    }

    fn enable(&self) -> Result<(), ErrorCode> {
        (**self).enable()
    }

    fn init_handle(&self, handle: SensorHandle) -> Result<(), ErrorCode> {
        (**self).init_handle(handle)
    }

    fn read_quaternion(&self) -> Result<QuaternionSample, ErrorCode> {
        (**self).read_quaternion()
    }

    fn read_linear_acceleration(&self) -> Result<LinearAccelerationSample, ErrorCode> {
        (**self).read_linear_acceleration()
    }

    fn read_calibrated_gyro(&self) -> Result<AngularRateSample, ErrorCode> {
        (**self).read_calibrated_gyro()
    }
}
