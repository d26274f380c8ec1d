//! Replay sensor driven by a pre-recorded list of fixes.
//!
//! Serves two purposes: the desktop CLI has no GPS, so it replays a route
//! file through this type, and the follower tests use it to script exact
//! permission / warmup / movement scenarios.

use parking_lot::Mutex;

use super::{LocationSensor, ServiceStatus};
use crate::coord::Coordinate;

/// A [`LocationSensor`] that replays a fixed sequence of fixes.
///
/// Each call to `last_fix` returns the next fix in the sequence; once the
/// route is exhausted the final fix is returned forever, mimicking a device
/// that has stopped moving. `status` reports `Starting` for a configurable
/// number of polls before settling on `Running`, so the follower's
/// wait-for-ready phase is exercised.
pub struct ScriptedSensor {
    permission: bool,
    heading: Mutex<f64>,
    fixes: Vec<Coordinate>,
    state: Mutex<ScriptState>,
}

struct ScriptState {
    next_fix: usize,
    warmup_polls_left: usize,
}

impl ScriptedSensor {
    /// Create a sensor that is immediately permitted and running.
    pub fn new(fixes: Vec<Coordinate>) -> Self {
        Self::with_warmup(fixes, 0)
    }

    /// Create a sensor that reports `Starting` for the first
    /// `warmup_polls` status reads.
    pub fn with_warmup(fixes: Vec<Coordinate>, warmup_polls: usize) -> Self {
        Self {
            permission: true,
            heading: Mutex::new(0.0),
            fixes,
            state: Mutex::new(ScriptState {
                next_fix: 0,
                warmup_polls_left: warmup_polls,
            }),
        }
    }

    /// Create a sensor whose permission was denied by the user.
    pub fn denied() -> Self {
        Self {
            permission: false,
            heading: Mutex::new(0.0),
            fixes: Vec::new(),
            state: Mutex::new(ScriptState {
                next_fix: 0,
                warmup_polls_left: 0,
            }),
        }
    }

    /// Set the heading the compass will report.
    pub fn set_heading(&self, degrees: f64) {
        *self.heading.lock() = degrees;
    }

    /// Number of fixes in the route.
    pub fn route_len(&self) -> usize {
        self.fixes.len()
    }
}

impl LocationSensor for ScriptedSensor {
    fn permission_granted(&self) -> bool {
        self.permission
    }

    fn status(&self) -> ServiceStatus {
        let mut state = self.state.lock();
        if state.warmup_polls_left > 0 {
            state.warmup_polls_left -= 1;
            ServiceStatus::Starting
        } else {
            ServiceStatus::Running
        }
    }

    fn last_fix(&self) -> Coordinate {
        let mut state = self.state.lock();
        let fix = self
            .fixes
            .get(state.next_fix)
            .or_else(|| self.fixes.last())
            .copied()
            .unwrap_or_default();
        if state.next_fix < self.fixes.len() {
            state.next_fix += 1;
        }
        fix
    }

    fn heading_degrees(&self) -> f64 {
        *self.heading.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_fixes_in_order() {
        let sensor = ScriptedSensor::new(vec![
            Coordinate::new(35.0, 139.0),
            Coordinate::new(35.1, 139.0),
        ]);

        assert_eq!(sensor.last_fix(), Coordinate::new(35.0, 139.0));
        assert_eq!(sensor.last_fix(), Coordinate::new(35.1, 139.0));
    }

    #[test]
    fn test_holds_final_fix_after_route_ends() {
        let sensor = ScriptedSensor::new(vec![Coordinate::new(35.0, 139.0)]);

        sensor.last_fix();
        assert_eq!(sensor.last_fix(), Coordinate::new(35.0, 139.0));
        assert_eq!(sensor.last_fix(), Coordinate::new(35.0, 139.0));
    }

    #[test]
    fn test_route_len_counts_fixes_not_reads() {
        let sensor = ScriptedSensor::new(vec![
            Coordinate::new(35.0, 139.0),
            Coordinate::new(35.1, 139.0),
        ]);

        assert_eq!(sensor.route_len(), 2);
        sensor.last_fix();
        assert_eq!(sensor.route_len(), 2);
    }

    #[test]
    fn test_empty_route_reports_null_island() {
        let sensor = ScriptedSensor::new(Vec::new());
        assert_eq!(sensor.last_fix(), Coordinate::default());
    }

    #[test]
    fn test_warmup_counts_down_per_status_poll() {
        let sensor = ScriptedSensor::with_warmup(Vec::new(), 2);

        assert_eq!(sensor.status(), ServiceStatus::Starting);
        assert_eq!(sensor.status(), ServiceStatus::Starting);
        assert_eq!(sensor.status(), ServiceStatus::Running);
        assert_eq!(sensor.status(), ServiceStatus::Running);
    }

    #[test]
    fn test_denied_sensor_has_no_permission() {
        let sensor = ScriptedSensor::denied();
        assert!(!sensor.permission_granted());
    }

    #[test]
    fn test_heading_is_settable() {
        let sensor = ScriptedSensor::new(Vec::new());
        sensor.set_heading(275.5);
        assert_eq!(sensor.heading_degrees(), 275.5);
    }
}
