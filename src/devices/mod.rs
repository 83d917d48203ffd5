//! Device data types
//!
//! Sample types produced by the virtual sensors of the vendor sensor layer.
//! The sensor layer itself is an external collaborator reached through
//! [`crate::platform::traits::SensorSubsystem`].

pub mod traits;
