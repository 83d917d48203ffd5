//! Linear acceleration and angular rate samples

use core::fmt::{self, Write};
use nalgebra::Vector3;

use super::decimal::write_decimal;

/// Linear acceleration (gravity removed) in m/s², body frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinearAccelerationSample {
    /// X axis, m/s²
    pub x: f32,
    /// Y axis, m/s²
    pub y: f32,
    /// Z axis, m/s²
    pub z: f32,
}

/// Calibrated angular rate in rad/s, body frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngularRateSample {
    /// X axis, rad/s
    pub x: f32,
    /// Y axis, rad/s
    pub y: f32,
    /// Z axis, rad/s
    pub z: f32,
}

macro_rules! impl_xyz_sample {
    ($ty:ident) => {
        impl $ty {
            /// Create a new sample from its axes
            pub const fn new(x: f32, y: f32, z: f32) -> Self {
                Self { x, y, z }
            }

            /// Axes in output order (x, y, z)
            pub fn components(&self) -> [f32; 3] {
                [self.x, self.y, self.z]
            }

            /// Convert to an nalgebra vector
            pub fn to_vector(&self) -> Vector3<f32> {
                Vector3::new(self.x, self.y, self.z)
            }
        }

        impl From<Vector3<f32>> for $ty {
            fn from(v: Vector3<f32>) -> Self {
                Self::new(v.x, v.y, v.z)
            }
        }
    };
}

impl_xyz_sample!(LinearAccelerationSample);
impl_xyz_sample!(AngularRateSample);

impl LinearAccelerationSample {
    /// Write the three fields, each followed by a single space
    pub fn write_fields<W: Write>(&self, out: &mut W) -> fmt::Result {
        for value in self.components() {
            write_decimal(out, value)?;
            out.write_char(' ')?;
        }
        Ok(())
    }
}

impl AngularRateSample {
    /// Write the three fields separated by spaces and terminate the line
    ///
    /// The gyroscope group is always the last one on an output line.
    pub fn write_fields<W: Write>(&self, out: &mut W) -> fmt::Result {
        write_decimal(out, self.x)?;
        out.write_char(' ')?;
        write_decimal(out, self.y)?;
        out.write_char(' ')?;
        write_decimal(out, self.z)?;
        out.write_char('\n')
    }
}
