//! The security decision engine
//!
//! All alarm-status mutations funnel through [`SecurityService::set_alarm_status`];
//! every other operation expresses its rules as calls to it. Operations are
//! synchronous and run to completion, including listener fan-out, before
//! returning.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use hs_core::{AlarmStatus, ArmingStatus, CameraFrame, Sensor, StatusListener};
use hs_image::ImageService;
use hs_storage::SecurityRepository;

/// Confidence threshold (percent) handed to the image service for every frame
pub const CAT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Receives security events and decides the system's alarm status.
///
/// Owns no persistent state itself: statuses and sensors live in the
/// repository, detection lives in the image service. The engine holds only
/// the registered listeners and the most recent cat verdict.
pub struct SecurityService {
    repository: Arc<dyn SecurityRepository>,
    image_service: Arc<dyn ImageService>,
    /// Append-only; deduplicated by `Arc` identity
    listeners: RwLock<Vec<Arc<dyn StatusListener>>>,
    /// Most recent detector verdict, re-checked when the arming mode changes
    cat_detected: AtomicBool,
}

impl SecurityService {
    pub fn new(
        repository: Arc<dyn SecurityRepository>,
        image_service: Arc<dyn ImageService>,
    ) -> Self {
        Self {
            repository,
            image_service,
            listeners: RwLock::new(Vec::new()),
            cat_detected: AtomicBool::new(false),
        }
    }

    /// Set the arming mode, re-evaluating the alarm as a consequence.
    ///
    /// Arming the interior with a cat in view triggers the alarm; disarming
    /// always clears it; any other arming sweeps every sensor inactive and
    /// lets the deactivations drive the downgrade rules. The new mode is
    /// persisted after the sweep, and listeners are told the sensor picture
    /// changed.
    pub fn set_arming_status(&self, status: ArmingStatus) {
        // Decision uses the requested mode, not a repository re-read.
        if self.cat_detected.load(Ordering::SeqCst) && status == ArmingStatus::ArmedHome {
            self.set_alarm_status(AlarmStatus::Alarm);
        }

        if status == ArmingStatus::Disarmed {
            self.set_alarm_status(AlarmStatus::NoAlarm);
        } else {
            for sensor in self.repository.sensors() {
                self.change_sensor_activation(&sensor.name, false);
            }
        }

        self.repository.set_arming_status(status);
        info!(status = ?status, "Arming status changed");

        for listener in self.listeners.read().iter() {
            listener.sensor_status_changed();
        }
    }

    /// Record a sensor's activation change and apply the alarm rules.
    ///
    /// While the alarm is fully triggered this is a complete no-op: sensor
    /// churn must not clear or escalate a latched alarm through this path.
    /// Otherwise the inactive→active and active→inactive edges run their
    /// transition tables, and the updated sensor record is persisted whether
    /// or not a transition fired.
    pub fn change_sensor_activation(&self, name: &str, active: bool) {
        if self.repository.alarm_status() == AlarmStatus::Alarm {
            debug!(sensor = %name, "Alarm is active, ignoring sensor change");
            return;
        }

        let Some(sensor) = self
            .repository
            .sensors()
            .into_iter()
            .find(|s| s.name == name)
        else {
            warn!(sensor = %name, "Activation change for unknown sensor, ignoring");
            return;
        };

        if active && !sensor.active {
            self.handle_sensor_activated();
        } else if !active && sensor.active {
            self.handle_sensor_deactivated();
        }

        self.repository.update_sensor(sensor.with_active(active));
    }

    fn handle_sensor_activated(&self) {
        if !self.repository.arming_status().is_armed() {
            return; // sensor triggers are ignored while disarmed
        }
        let current = self.repository.alarm_status();
        let next = current.after_sensor_activated();
        if next != current {
            self.set_alarm_status(next);
        }
    }

    fn handle_sensor_deactivated(&self) {
        let current = self.repository.alarm_status();
        let next = current.after_sensor_deactivated();
        if next != current {
            self.set_alarm_status(next);
        }
    }

    /// Run a captured frame through the detector and apply the cat rules.
    ///
    /// The verdict is remembered for later arming changes. A cat seen while
    /// armed-home triggers the alarm; no cat with every sensor inactive
    /// clears it (an active sensor still indicates a possible intrusion, so
    /// it blocks the clear). Listeners get the verdict either way.
    pub fn process_image(&self, frame: &CameraFrame) {
        let cat = self
            .image_service
            .image_contains_cat(frame, CAT_CONFIDENCE_THRESHOLD);
        self.handle_cat_detected(cat);
    }

    fn handle_cat_detected(&self, cat: bool) {
        self.cat_detected.store(cat, Ordering::SeqCst);

        if cat && self.repository.arming_status() == ArmingStatus::ArmedHome {
            self.set_alarm_status(AlarmStatus::Alarm);
        } else if !cat && self.repository.sensors().iter().all(|s| !s.active) {
            self.set_alarm_status(AlarmStatus::NoAlarm);
        }

        for listener in self.listeners.read().iter() {
            listener.cat_detected(cat);
        }
    }

    /// Persist an alarm status and notify every listener.
    ///
    /// The single mutation primitive: no other code path writes the alarm.
    pub fn set_alarm_status(&self, status: AlarmStatus) {
        self.repository.set_alarm_status(status);
        info!(status = ?status, "Alarm status set");

        for listener in self.listeners.read().iter() {
            listener.alarm_status_changed(status);
        }
    }

    /// Register a listener; adding the same `Arc` twice is a no-op.
    pub fn add_status_listener(&self, listener: Arc<dyn StatusListener>) {
        let mut listeners = self.listeners.write();
        if listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            return;
        }
        listeners.push(listener);
    }

    pub fn alarm_status(&self) -> AlarmStatus {
        self.repository.alarm_status()
    }

    pub fn arming_status(&self) -> ArmingStatus {
        self.repository.arming_status()
    }

    pub fn sensors(&self) -> BTreeSet<Sensor> {
        self.repository.sensors()
    }

    pub fn add_sensor(&self, sensor: Sensor) {
        self.repository.add_sensor(sensor);
    }

    pub fn remove_sensor(&self, name: &str) {
        self.repository.remove_sensor(name);
    }
}
