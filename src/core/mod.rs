//! Application core
//!
//! This module contains the sensor configuration, the bring-up sequencer and
//! the periodic sampling task, together with the logging infrastructure.

pub mod app;
pub mod config;
pub mod logging;
