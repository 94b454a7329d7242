//! Security state storage for HomeSentry
//!
//! This crate defines the `SecurityRepository` collaborator contract consumed
//! by the security engine, plus two backends: a dashmap-based
//! `InMemoryRepository` and a write-through `JsonFileRepository` using
//! versioned JSON files.

use std::collections::BTreeSet;

use hs_core::{AlarmStatus, ArmingStatus, Sensor};

pub mod file;
pub mod memory;

pub use file::{JsonFileRepository, StorageError, StorageFile, StorageResult};
pub use memory::InMemoryRepository;

/// Persistent store for the security system's state.
///
/// The engine treats every method as synchronous and infallible; a backend
/// that can fail internally (I/O, serialization) must handle or log the
/// failure itself rather than surface it through this contract.
pub trait SecurityRepository: Send + Sync {
    /// Current arming mode
    fn arming_status(&self) -> ArmingStatus;

    /// Persist a new arming mode
    fn set_arming_status(&self, status: ArmingStatus);

    /// Current alarm status
    fn alarm_status(&self) -> AlarmStatus;

    /// Persist a new alarm status
    fn set_alarm_status(&self, status: AlarmStatus);

    /// All known sensors, ordered by name
    fn sensors(&self) -> BTreeSet<Sensor>;

    /// Add a sensor; an existing sensor with the same name is replaced
    fn add_sensor(&self, sensor: Sensor);

    /// Remove a sensor by name; unknown names are ignored
    fn remove_sensor(&self, name: &str);

    /// Replace the stored record for a sensor, keyed by name
    fn update_sensor(&self, sensor: Sensor);
}
