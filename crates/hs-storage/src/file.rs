//! JSON file repository backend
//!
//! Persists the whole security state as one JSON document wrapped in a
//! versioned envelope:
//!
//! ```json
//! {
//!   "version": 1,
//!   "key": "homesentry.security_state",
//!   "data": { "arming_status": "disarmed", "alarm_status": "no_alarm", "sensors": [] }
//! }
//! ```
//!
//! Every mutation writes through to disk (temp file + rename). Load failures
//! surface at construction; write failures after that are logged and dropped,
//! keeping the repository contract infallible for the engine.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use hs_core::{AlarmStatus, ArmingStatus, Sensor};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::SecurityRepository;

/// Storage key embedded in the envelope
pub const STORAGE_KEY: &str = "homesentry.security_state";
/// Current storage format version
pub const STORAGE_VERSION: u32 = 1;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch for {key}: expected {expected}, found {found}")]
    VersionMismatch {
        key: String,
        expected: u32,
        found: u32,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Versioned envelope around a stored document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageFile<T> {
    /// Format version - breaking changes bump this
    pub version: u32,
    /// Document identifier
    pub key: String,
    /// The actual data
    pub data: T,
}

/// The persisted security state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SecurityState {
    #[serde(default)]
    arming_status: ArmingStatus,
    #[serde(default)]
    alarm_status: AlarmStatus,
    #[serde(default)]
    sensors: BTreeSet<Sensor>,
}

/// Repository persisting state to a single JSON file
pub struct JsonFileRepository {
    path: PathBuf,
    state: RwLock<SecurityState>,
}

impl JsonFileRepository {
    /// Open a repository at the given path, loading existing state.
    ///
    /// A missing file yields the defaults (disarmed, no alarm, no sensors);
    /// an unreadable or version-mismatched file is an error.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        let state = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let file: StorageFile<SecurityState> = serde_json::from_str(&raw)?;
            if file.version != STORAGE_VERSION {
                return Err(StorageError::VersionMismatch {
                    key: file.key,
                    expected: STORAGE_VERSION,
                    found: file.version,
                });
            }
            debug!(path = %path.display(), "Loaded security state");
            file.data
        } else {
            debug!(path = %path.display(), "No stored state, starting from defaults");
            SecurityState::default()
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    fn persist(&self, state: &SecurityState) {
        if let Err(e) = self.try_persist(state) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist security state");
        }
    }

    fn try_persist(&self, state: &SecurityState) -> StorageResult<()> {
        let file = StorageFile {
            version: STORAGE_VERSION,
            key: STORAGE_KEY.to_string(),
            data: state.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        // Write to a sibling temp file, then rename into place
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SecurityRepository for JsonFileRepository {
    fn arming_status(&self) -> ArmingStatus {
        self.state.read().arming_status
    }

    fn set_arming_status(&self, status: ArmingStatus) {
        let mut state = self.state.write();
        state.arming_status = status;
        self.persist(&state);
    }

    fn alarm_status(&self) -> AlarmStatus {
        self.state.read().alarm_status
    }

    fn set_alarm_status(&self, status: AlarmStatus) {
        let mut state = self.state.write();
        state.alarm_status = status;
        self.persist(&state);
    }

    fn sensors(&self) -> BTreeSet<Sensor> {
        self.state.read().sensors.clone()
    }

    fn add_sensor(&self, sensor: Sensor) {
        let mut state = self.state.write();
        state.sensors.replace(sensor);
        self.persist(&state);
    }

    fn remove_sensor(&self, name: &str) {
        let mut state = self.state.write();
        state.sensors.retain(|s| s.name != name);
        self.persist(&state);
    }

    fn update_sensor(&self, sensor: Sensor) {
        let mut state = self.state.write();
        state.sensors.replace(sensor);
        self.persist(&state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_core::SensorKind;

    #[test]
    fn missing_file_starts_from_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::open(dir.path().join("state.json")).unwrap();
        assert_eq!(repo.arming_status(), ArmingStatus::Disarmed);
        assert_eq!(repo.alarm_status(), AlarmStatus::NoAlarm);
        assert!(repo.sensors().is_empty());
    }

    #[test]
    fn state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        {
            let repo = JsonFileRepository::open(&path).unwrap();
            repo.set_arming_status(ArmingStatus::ArmedHome);
            repo.set_alarm_status(AlarmStatus::PendingAlarm);
            repo.add_sensor(Sensor::new("front-door", SensorKind::Door).with_active(true));
        }

        let repo = JsonFileRepository::open(&path).unwrap();
        assert_eq!(repo.arming_status(), ArmingStatus::ArmedHome);
        assert_eq!(repo.alarm_status(), AlarmStatus::PendingAlarm);

        let sensors = repo.sensors();
        assert_eq!(sensors.len(), 1);
        let sensor = sensors.iter().next().unwrap();
        assert_eq!(sensor.name, "front-door");
        assert!(sensor.active);
    }

    #[test]
    fn update_replaces_stored_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let repo = JsonFileRepository::open(&path).unwrap();
        repo.add_sensor(Sensor::new("patio-window", SensorKind::Window));
        repo.update_sensor(Sensor::new("patio-window", SensorKind::Window).with_active(true));

        let sensors = repo.sensors();
        assert_eq!(sensors.len(), 1);
        assert!(sensors.iter().next().unwrap().active);
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(
            &path,
            r#"{"version": 99, "key": "homesentry.security_state", "data": {}}"#,
        )
        .unwrap();

        match JsonFileRepository::open(&path) {
            Err(StorageError::VersionMismatch { found, expected, .. }) => {
                assert_eq!(found, 99);
                assert_eq!(expected, STORAGE_VERSION);
            }
            other => panic!("expected version mismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileRepository::open(&path),
            Err(StorageError::Json(_))
        ));
    }
}
