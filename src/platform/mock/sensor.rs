//! Mock sensor subsystem for testing

use core::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::vec::Vec;

use crate::core::config::SensorSetup;
use crate::devices::traits::{
    AngularRateSample, LinearAccelerationSample, QuaternionSample, SensorHandle,
};
use crate::platform::traits::SensorSubsystem;
use crate::platform::ErrorCode;

/// Call recorded by [`MockSensors`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockCall {
    Configure,
    Enable,
    InitHandle(SensorHandle),
    ReadQuaternion,
    ReadLinearAcceleration,
    ReadCalibratedGyro,
}

/// Mock sensor subsystem
///
/// Reads return scripted results in FIFO order. When a script runs dry the
/// read succeeds with a resting value (identity quaternion, zero vectors).
/// All state lives behind `RefCell`/`Cell` because the trait takes `&self`.
///
/// # Example
///
/// ```
/// use xdk_stream::devices::traits::SensorHandle;
/// use xdk_stream::platform::mock::{MockCall, MockSensors};
/// use xdk_stream::platform::traits::SensorSubsystem;
///
/// let sensors = MockSensors::new();
/// sensors.init_handle(SensorHandle::Orientation).unwrap();
/// assert_eq!(sensors.calls(), vec![MockCall::InitHandle(SensorHandle::Orientation)]);
/// ```
#[derive(Debug, Default)]
pub struct MockSensors {
    quaternions: RefCell<VecDeque<Result<QuaternionSample, ErrorCode>>>,
    linear: RefCell<VecDeque<Result<LinearAccelerationSample, ErrorCode>>>,
    gyro: RefCell<VecDeque<Result<AngularRateSample, ErrorCode>>>,
    configure_error: Cell<Option<ErrorCode>>,
    enable_error: Cell<Option<ErrorCode>>,
    handle_errors: RefCell<Vec<(SensorHandle, ErrorCode)>>,
    configured: Cell<Option<SensorSetup>>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockSensors {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next orientation read
    pub fn push_quaternion(&self, result: Result<QuaternionSample, ErrorCode>) {
        self.quaternions.borrow_mut().push_back(result);
    }

    /// Queue the result of the next linear acceleration read
    pub fn push_linear_acceleration(&self, result: Result<LinearAccelerationSample, ErrorCode>) {
        self.linear.borrow_mut().push_back(result);
    }

    /// Queue the result of the next calibrated gyroscope read
    pub fn push_calibrated_gyro(&self, result: Result<AngularRateSample, ErrorCode>) {
        self.gyro.borrow_mut().push_back(result);
    }

    /// Make `configure` fail with `code`
    pub fn fail_configure(&self, code: ErrorCode) {
        self.configure_error.set(Some(code));
    }

    /// Make `enable` fail with `code`
    pub fn fail_enable(&self, code: ErrorCode) {
        self.enable_error.set(Some(code));
    }

    /// Make `init_handle(handle)` fail with `code`
    pub fn fail_handle(&self, handle: SensorHandle, code: ErrorCode) {
        self.handle_errors.borrow_mut().push((handle, code));
    }

    /// Setup passed to the last successful `configure`
    pub fn configured(&self) -> Option<SensorSetup> {
        self.configured.get()
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    /// Number of calls matching `call`
    pub fn count(&self, call: MockCall) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: MockCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl SensorSubsystem for MockSensors {
    fn configure(&self, setup: &SensorSetup) -> Result<(), ErrorCode> {
        self.record(MockCall::Configure);
        if let Some(code) = self.configure_error.get() {
            return Err(code);
        }
        self.configured.set(Some(*setup));
        Ok(())
    }

    fn enable(&self) -> Result<(), ErrorCode> {
        self.record(MockCall::Enable);
        match self.enable_error.get() {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }

    fn init_handle(&self, handle: SensorHandle) -> Result<(), ErrorCode> {
        self.record(MockCall::InitHandle(handle));
        match self
            .handle_errors
            .borrow()
            .iter()
            .find(|(h, _)| *h == handle)
        {
            Some((_, code)) => Err(*code),
            None => Ok(()),
        }
    }

    fn read_quaternion(&self) -> Result<QuaternionSample, ErrorCode> {
        self.record(MockCall::ReadQuaternion);
        self.quaternions
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(QuaternionSample::identity()))
    }

    fn read_linear_acceleration(&self) -> Result<LinearAccelerationSample, ErrorCode> {
        self.record(MockCall::ReadLinearAcceleration);
        self.linear
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(LinearAccelerationSample::default()))
    }

    fn read_calibrated_gyro(&self) -> Result<AngularRateSample, ErrorCode> {
        self.record(MockCall::ReadCalibratedGyro);
        self.gyro
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(AngularRateSample::default()))
    }
}
