//! Sensor record type
//!
//! A sensor's identity is its unique name; the activation flag is payload.
//! Equality, ordering, and hashing all go through the name so that a sensor
//! set keyed by identity stays stable while flags change.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Category of a physical sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Door,
    Window,
    Motion,
}

/// A binary presence/contact device contributing activation events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    /// Opaque unique identity
    pub name: String,

    /// What kind of device this is
    pub kind: SensorKind,

    /// Current activation flag
    #[serde(default)]
    pub active: bool,
}

impl Sensor {
    /// Create a new, inactive sensor
    pub fn new(name: impl Into<String>, kind: SensorKind) -> Self {
        Self {
            name: name.into(),
            kind,
            active: false,
        }
    }

    /// Return an updated copy with the given activation flag.
    ///
    /// Sensors are immutable records from the engine's point of view; updates
    /// produce a replacement that the repository stores by name.
    pub fn with_active(&self, active: bool) -> Sensor {
        Sensor {
            name: self.name.clone(),
            kind: self.kind,
            active,
        }
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        // Identity is the name; kind and flag are not compared
        self.name == other.name
    }
}

impl Eq for Sensor {}

impl PartialOrd for Sensor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sensor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Sensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
