//! Device traits
//!
//! Hardware-independent sample types and sensor handles. These are plain
//! value types: produced fresh by every read and consumed within one
//! sampling cycle.

pub mod decimal;
pub mod handle;
pub mod motion;
pub mod quaternion;

pub use decimal::{write_decimal, MAX_FIELD_WIDTH};
pub use handle::SensorHandle;
pub use motion::{AngularRateSample, LinearAccelerationSample};
pub use quaternion::QuaternionSample;
