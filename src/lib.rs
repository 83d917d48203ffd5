#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! xdk_stream - Sensor streaming application for the XDK110 board
//!
//! This library configures the on-board sensors through a vendor sensor layer,
//! brings them up in two queued phases (setup, then enable) and runs a periodic
//! sampling task that writes orientation, linear acceleration and calibrated
//! angular rate as text lines to a serial sink.

// Platform abstraction layer (collaborator traits, mocks, simulation)
pub mod platform;

// Sensor sample types shared by platform and application
pub mod devices;

// Application core (configuration, bring-up sequencer, sampling task)
pub mod core;
