//! Orientation sample
//!
//! Quaternion output of the orientation virtual sensor, which fuses the
//! accelerometer, gyroscope and magnetometer inside the vendor sensor layer.

use core::fmt::{self, Write};
use nalgebra::Quaternion;

use super::decimal::write_decimal;

/// Device orientation as a quaternion (w, x, y, z)
///
/// Convention: w is the scalar component, (x, y, z) is the vector part.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuaternionSample {
    /// Scalar component
    pub w: f32,
    /// Vector part, X
    pub x: f32,
    /// Vector part, Y
    pub y: f32,
    /// Vector part, Z
    pub z: f32,
}

impl Default for QuaternionSample {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl QuaternionSample {
    /// Create a new sample from its components
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Identity orientation
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Components in output order (w, x, y, z)
    pub fn components(&self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Check if the quaternion is a unit quaternion (1% tolerance)
    pub fn is_unit(&self) -> bool {
        let norm = self.to_quaternion().norm();
        (norm - 1.0).abs() < 0.01
    }

    /// Convert to an nalgebra quaternion
    pub fn to_quaternion(&self) -> Quaternion<f32> {
        Quaternion::new(self.w, self.x, self.y, self.z)
    }

    /// Write the four fields, each followed by a single space
    pub fn write_fields<W: Write>(&self, out: &mut W) -> fmt::Result {
        for value in self.components() {
            write_decimal(out, value)?;
            out.write_char(' ')?;
        }
        Ok(())
    }
}

impl From<Quaternion<f32>> for QuaternionSample {
    fn from(q: Quaternion<f32>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}
