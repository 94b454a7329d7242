//! In-memory repository backend
//!
//! Default backend for tests and hosts that do their own persistence.

use std::collections::BTreeSet;

use dashmap::DashMap;
use hs_core::{AlarmStatus, ArmingStatus, Sensor};
use parking_lot::RwLock;
use tracing::debug;

use crate::SecurityRepository;

/// Repository keeping all security state in process memory.
///
/// Starts disarmed with no alarm and an empty sensor set.
#[derive(Default)]
pub struct InMemoryRepository {
    /// Sensors keyed by name
    sensors: DashMap<String, Sensor>,
    arming_status: RwLock<ArmingStatus>,
    alarm_status: RwLock<AlarmStatus>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecurityRepository for InMemoryRepository {
    fn arming_status(&self) -> ArmingStatus {
        *self.arming_status.read()
    }

    fn set_arming_status(&self, status: ArmingStatus) {
        debug!(status = ?status, "Setting arming status");
        *self.arming_status.write() = status;
    }

    fn alarm_status(&self) -> AlarmStatus {
        *self.alarm_status.read()
    }

    fn set_alarm_status(&self, status: AlarmStatus) {
        debug!(status = ?status, "Setting alarm status");
        *self.alarm_status.write() = status;
    }

    fn sensors(&self) -> BTreeSet<Sensor> {
        self.sensors.iter().map(|r| r.value().clone()).collect()
    }

    fn add_sensor(&self, sensor: Sensor) {
        debug!(sensor = %sensor.name, "Adding sensor");
        self.sensors.insert(sensor.name.clone(), sensor);
    }

    fn remove_sensor(&self, name: &str) {
        debug!(sensor = %name, "Removing sensor");
        self.sensors.remove(name);
    }

    fn update_sensor(&self, sensor: Sensor) {
        self.sensors.insert(sensor.name.clone(), sensor);
    }
}
