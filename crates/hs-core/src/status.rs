//! Alarm and arming status enums
//!
//! AlarmStatus carries the two pure sensor transition tables:
//!
//! ```text
//! sensor activated:    NoAlarm → PendingAlarm → Alarm (sticky)
//! sensor deactivated:  Alarm → PendingAlarm → NoAlarm (sticky)
//! ```
//!
//! Whether a transition applies at all (arming mode, alarm latching) is the
//! engine's decision; the tables themselves are context-free.

use serde::{Deserialize, Serialize};

/// The system's current threat-response state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmStatus {
    /// Nothing suspicious observed
    #[default]
    NoAlarm,
    /// A sensor tripped while armed; alarm sounds unless resolved
    PendingAlarm,
    /// Alarm fully triggered
    Alarm,
}

impl AlarmStatus {
    /// Next status after a sensor goes inactive → active.
    pub fn after_sensor_activated(self) -> AlarmStatus {
        match self {
            AlarmStatus::NoAlarm => AlarmStatus::PendingAlarm,
            AlarmStatus::PendingAlarm => AlarmStatus::Alarm,
            AlarmStatus::Alarm => AlarmStatus::Alarm,
        }
    }

    /// Next status after a sensor goes active → inactive.
    pub fn after_sensor_deactivated(self) -> AlarmStatus {
        match self {
            AlarmStatus::PendingAlarm => AlarmStatus::NoAlarm,
            AlarmStatus::Alarm => AlarmStatus::PendingAlarm,
            AlarmStatus::NoAlarm => AlarmStatus::NoAlarm,
        }
    }
}

/// The operator-selected mode governing whether sensor triggers are monitored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmingStatus {
    /// Sensor triggers are ignored
    #[default]
    Disarmed,
    /// Armed with occupants home; interior cat detection also triggers
    ArmedHome,
    /// Armed with nobody home
    ArmedAway,
}

impl ArmingStatus {
    /// True for any mode other than `Disarmed`
    pub fn is_armed(self) -> bool {
        self != ArmingStatus::Disarmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_escalates_toward_alarm() {
        assert_eq!(
            AlarmStatus::NoAlarm.after_sensor_activated(),
            AlarmStatus::PendingAlarm
        );
        assert_eq!(
            AlarmStatus::PendingAlarm.after_sensor_activated(),
            AlarmStatus::Alarm
        );
        assert_eq!(AlarmStatus::Alarm.after_sensor_activated(), AlarmStatus::Alarm);
    }

    #[test]
    fn deactivation_downgrades_toward_no_alarm() {
        assert_eq!(
            AlarmStatus::Alarm.after_sensor_deactivated(),
            AlarmStatus::PendingAlarm
        );
        assert_eq!(
            AlarmStatus::PendingAlarm.after_sensor_deactivated(),
            AlarmStatus::NoAlarm
        );
        assert_eq!(
            AlarmStatus::NoAlarm.after_sensor_deactivated(),
            AlarmStatus::NoAlarm
        );
    }

    #[test]
    fn armed_modes() {
        assert!(!ArmingStatus::Disarmed.is_armed());
        assert!(ArmingStatus::ArmedHome.is_armed());
        assert!(ArmingStatus::ArmedAway.is_armed());
    }

    #[test]
    fn statuses_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&AlarmStatus::PendingAlarm).unwrap(),
            "\"pending_alarm\""
        );
        assert_eq!(
            serde_json::to_string(&ArmingStatus::ArmedAway).unwrap(),
            "\"armed_away\""
        );
        let parsed: ArmingStatus = serde_json::from_str("\"armed_home\"").unwrap();
        assert_eq!(parsed, ArmingStatus::ArmedHome);
    }
}
