//! Host simulation of the XDK110 board
//!
//! Stands in for the vendor sensor layer and board support package so the
//! whole application can run on a development machine:
//!
//! - [`SimSensors`]: deterministic virtual sensors with optional injected
//!   read failures
//! - [`StdoutSink`]: serial output on the process's standard output
//! - [`SimDiagnostics`]: raised errors go to the log
//!
//! Only available with the `sim` feature.

mod console;
mod sensors;

pub use console::{SimDiagnostics, StdoutSink};
pub use sensors::SimSensors;
