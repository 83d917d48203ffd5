//! Simulated sensor subsystem
//!
//! The board rotates slowly about its Z axis at a constant rate and does not
//! translate, so the fused outputs are:
//!
//! - orientation: rotation about Z by `rate * t`
//! - linear acceleration: zero (gravity removed)
//! - calibrated angular rate: `(0, 0, rate)`
//!
//! Time advances by one sampling period per orientation read, which keeps
//! the output independent of host timing.

use core::cell::Cell;

use nalgebra::{UnitQuaternion, Vector3};

use crate::core::config::SensorSetup;
use crate::devices::traits::{
    AngularRateSample, LinearAccelerationSample, QuaternionSample, SensorHandle,
};
use crate::platform::traits::SensorSubsystem;
use crate::platform::{ErrorCode, ErrorReason};
use crate::{log_debug, log_info};

/// Default rotation rate about Z in rad/s
pub const DEFAULT_RATE_RAD_S: f32 = 0.1;

const fn slot(handle: SensorHandle) -> usize {
    match handle {
        SensorHandle::Orientation => 0,
        SensorHandle::LinearAcceleration => 1,
        SensorHandle::CalibratedGyroscope => 2,
    }
}

/// Simulated vendor sensor layer
///
/// Enforces the bring-up order of the real layer: `configure`, then
/// `enable`, then `init_handle` per handle, then reads.
pub struct SimSensors {
    rate_rad_s: f32,
    period_s: f32,
    setup: Cell<Option<SensorSetup>>,
    enabled: Cell<bool>,
    initialized: [Cell<bool>; 3],
    injected: [Cell<Option<ErrorCode>>; 3],
    fail_every: [Cell<u32>; 3],
    reads: [Cell<u32>; 3],
    ticks: Cell<u32>,
}

impl SimSensors {
    /// Create a simulated board sampled every `period_ms`
    pub fn new(period_ms: u32) -> Self {
        Self::with_rate(period_ms, DEFAULT_RATE_RAD_S)
    }

    /// Create a simulated board rotating at `rate_rad_s` about Z
    pub fn with_rate(period_ms: u32, rate_rad_s: f32) -> Self {
        Self {
            rate_rad_s,
            period_s: period_ms as f32 / 1000.0,
            setup: Cell::new(None),
            enabled: Cell::new(false),
            initialized: Default::default(),
            injected: Default::default(),
            fail_every: Default::default(),
            reads: Default::default(),
            ticks: Cell::new(0),
        }
    }

    /// Fail the next read of `handle` with `code`
    pub fn inject_failure(&self, handle: SensorHandle, code: ErrorCode) {
        self.injected[slot(handle)].set(Some(code));
    }

    /// Fail every `every`-th read of `handle` with a timeout (0 disables)
    pub fn fail_every(&self, handle: SensorHandle, every: u32) {
        self.fail_every[slot(handle)].set(every);
    }

    /// Check if `handle` has been initialised
    pub fn is_initialized(&self, handle: SensorHandle) -> bool {
        self.initialized[slot(handle)].get()
    }

    /// Check if the sensors have been enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn check_read(&self, handle: SensorHandle) -> Result<(), ErrorCode> {
        let i = slot(handle);
        if !self.initialized[i].get() {
            return Err(ErrorCode::error(ErrorReason::NotInitialized));
        }

        let reads = self.reads[i].get().wrapping_add(1);
        self.reads[i].set(reads);

        if let Some(code) = self.injected[i].take() {
            return Err(code);
        }
        let every = self.fail_every[i].get();
        if every != 0 && reads % every == 0 {
            return Err(ErrorCode::error(ErrorReason::Timeout));
        }
        Ok(())
    }
}

impl SensorSubsystem for SimSensors {
    fn configure(&self, setup: &SensorSetup) -> Result<(), ErrorCode> {
        if self.setup.get().is_some() {
            return Err(ErrorCode::error(ErrorReason::Failure));
        }
        log_info!("Sim: {} sensors configured", setup.enable.count());
        self.setup.set(Some(*setup));
        Ok(())
    }

    fn enable(&self) -> Result<(), ErrorCode> {
        if self.setup.get().is_none() {
            return Err(ErrorCode::error(ErrorReason::NotInitialized));
        }
        self.enabled.set(true);
        Ok(())
    }

    fn init_handle(&self, handle: SensorHandle) -> Result<(), ErrorCode> {
        let Some(setup) = self.setup.get().filter(|_| self.enabled.get()) else {
            return Err(ErrorCode::error(ErrorReason::NotInitialized));
        };

        if let Some(missing) = handle
            .required_sensors()
            .iter()
            .find(|kind| !setup.enable.is_enabled(**kind))
        {
            log_debug!("Sim: {} needs the {}", handle, missing);
            return Err(ErrorCode::error(ErrorReason::NotInitialized));
        }

        self.initialized[slot(handle)].set(true);
        Ok(())
    }

    fn read_quaternion(&self) -> Result<QuaternionSample, ErrorCode> {
        self.check_read(SensorHandle::Orientation)?;

        let tick = self.ticks.get();
        self.ticks.set(tick.wrapping_add(1));

        let angle = self.rate_rad_s * self.period_s * tick as f32;
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle);
        Ok(QuaternionSample::from(rotation.into_inner()))
    }

    fn read_linear_acceleration(&self) -> Result<LinearAccelerationSample, ErrorCode> {
        self.check_read(SensorHandle::LinearAcceleration)?;
        Ok(LinearAccelerationSample::from(Vector3::zeros()))
    }

    fn read_calibrated_gyro(&self) -> Result<AngularRateSample, ErrorCode> {
        self.check_read(SensorHandle::CalibratedGyroscope)?;
        Ok(AngularRateSample::new(0.0, 0.0, self.rate_rad_s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SensorEnableSet;

    fn ready(sensors: &SimSensors) {
        sensors.configure(&SensorSetup::xdk110()).unwrap();
        sensors.enable().unwrap();
        for handle in SensorHandle::ALL {
            sensors.init_handle(handle).unwrap();
        }
    }

    #[test]
    fn test_sim_requires_bring_up_order() {
        let sensors = SimSensors::new(20);
        assert!(sensors.enable().is_err());
        assert!(sensors.init_handle(SensorHandle::Orientation).is_err());
        assert!(sensors.read_calibrated_gyro().is_err());

        ready(&sensors);
        assert!(sensors.read_calibrated_gyro().is_ok());
    }

    #[test]
    fn test_sim_rejects_handle_without_required_sensor() {
        let sensors = SimSensors::new(20);
        let mut setup = SensorSetup::xdk110();
        setup.enable = SensorEnableSet {
            mag: false,
            ..SensorEnableSet::xdk110()
        };
        sensors.configure(&setup).unwrap();
        sensors.enable().unwrap();

        assert_eq!(
            sensors.init_handle(SensorHandle::Orientation),
            Err(ErrorCode::error(ErrorReason::NotInitialized))
        );
        assert!(sensors.init_handle(SensorHandle::CalibratedGyroscope).is_ok());
    }

    #[test]
    fn test_sim_rotates_about_z() {
        let sensors = SimSensors::with_rate(100, 1.0);
        ready(&sensors);

        let first = sensors.read_quaternion().unwrap();
        assert_eq!(first, QuaternionSample::identity());

        let second = sensors.read_quaternion().unwrap();
        assert!(second.is_unit());
        assert_eq!(second.x, 0.0);
        assert_eq!(second.y, 0.0);
        assert!((second.z - 0.05f32.sin()).abs() < 1e-6);
    }

    #[test]
    fn test_sim_injected_failure_is_one_shot() {
        let sensors = SimSensors::new(20);
        ready(&sensors);
        let code = ErrorCode::error(ErrorReason::BusFailure);
        sensors.inject_failure(SensorHandle::LinearAcceleration, code);

        assert_eq!(sensors.read_linear_acceleration(), Err(code));
        assert!(sensors.read_linear_acceleration().is_ok());
    }

    #[test]
    fn test_sim_periodic_failure() {
        let sensors = SimSensors::new(20);
        ready(&sensors);
        sensors.fail_every(SensorHandle::CalibratedGyroscope, 3);

        let outcomes: std::vec::Vec<bool> =
            (0..6).map(|_| sensors.read_calibrated_gyro().is_ok()).collect();
        assert_eq!(outcomes, std::vec![true, true, false, true, true, false]);
    }
}
