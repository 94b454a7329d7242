//! Core types for HomeSentry
//!
//! This crate provides the fundamental types shared by the security engine and
//! its collaborators: AlarmStatus, ArmingStatus, Sensor, CameraFrame, and the
//! StatusListener observer trait.

mod frame;
mod listener;
mod sensor;
mod status;

pub use frame::CameraFrame;
pub use listener::StatusListener;
pub use sensor::{Sensor, SensorKind};
pub use status::{AlarmStatus, ArmingStatus};
