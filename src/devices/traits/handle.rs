//! Virtual sensor handles
//!
//! A handle identifies one fused quantity to the vendor sensor layer. Each
//! handle must be initialised once during bring-up before it can be read.

use core::fmt;

use crate::core::config::SensorKind;

/// Virtual sensors read by the sampling task, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorHandle {
    /// Orientation quaternion
    Orientation,
    /// Linear acceleration (gravity removed)
    LinearAcceleration,
    /// Calibrated gyroscope
    CalibratedGyroscope,
}

impl SensorHandle {
    /// All handles in initialisation and read order
    pub const ALL: [SensorHandle; 3] = [
        SensorHandle::Orientation,
        SensorHandle::LinearAcceleration,
        SensorHandle::CalibratedGyroscope,
    ];

    /// Human-readable handle name
    pub const fn name(&self) -> &'static str {
        match self {
            SensorHandle::Orientation => "OrientationSensor",
            SensorHandle::LinearAcceleration => "LinearAccelSensor",
            SensorHandle::CalibratedGyroscope => "GyroscopeCalibratedSensor",
        }
    }

    /// Physical sensors this virtual sensor fuses
    pub const fn required_sensors(&self) -> &'static [SensorKind] {
        match self {
            SensorHandle::Orientation | SensorHandle::LinearAcceleration => &[
                SensorKind::Accelerometer,
                SensorKind::Gyroscope,
                SensorKind::Magnetometer,
            ],
            SensorHandle::CalibratedGyroscope => &[SensorKind::Gyroscope],
        }
    }
}

impl fmt::Display for SensorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_order() {
        assert_eq!(
            SensorHandle::ALL,
            [
                SensorHandle::Orientation,
                SensorHandle::LinearAcceleration,
                SensorHandle::CalibratedGyroscope
            ]
        );
    }

    #[test]
    fn test_calibrated_gyro_needs_only_gyroscope() {
        assert_eq!(
            SensorHandle::CalibratedGyroscope.required_sensors(),
            &[SensorKind::Gyroscope]
        );
        assert!(SensorHandle::Orientation
            .required_sensors()
            .contains(&SensorKind::Magnetometer));
    }
}
