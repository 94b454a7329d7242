//! Status listener capability trait

use crate::AlarmStatus;

/// Observer notified by the security engine of state changes.
///
/// Implementations are registered once at setup and kept for the engine's
/// lifetime; all notifications happen synchronously inside the triggering
/// engine operation, before it returns. No ordering is guaranteed across
/// listeners for the same event.
pub trait StatusListener: Send + Sync {
    /// The alarm status was persisted with a (possibly unchanged) value
    fn alarm_status_changed(&self, status: AlarmStatus);

    /// A camera frame was processed; carries the latest cat verdict
    fn cat_detected(&self, cat: bool);

    /// The sensor list or arming mode changed; listeners should re-read
    fn sensor_status_changed(&self);
}
