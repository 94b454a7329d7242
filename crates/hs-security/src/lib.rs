//! Security decision engine for HomeSentry
//!
//! The `SecurityService` combines the arming mode, sensor activation events,
//! and the camera's cat-detection verdicts into alarm-status transitions,
//! persisting every decision to the repository and fanning it out to
//! registered status listeners.

mod service;

pub use service::{SecurityService, CAT_CONFIDENCE_THRESHOLD};
