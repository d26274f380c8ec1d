//! Compass-driven cursor rotation.
//!
//! The cursor faces the direction of travel by mirroring the compass
//! heading: a heading of `h` degrees clockwise from north becomes a visual
//! rotation of `(360 - h) mod 360`. The host drives it with a per-frame
//! `tick`; the follower only flips the enabled switch once the location
//! service is live.

use parking_lot::Mutex;

use crate::sensor::LocationSensor;

/// Visual rotation for a compass heading.
///
/// Headings are clockwise from north, screen rotation is counterclockwise,
/// hence the mirror. Result is normalized to [0, 360).
pub fn rotation_for_heading(heading_degrees: f64) -> f64 {
    (360.0 - heading_degrees).rem_euclid(360.0)
}

#[derive(Debug)]
struct CursorState {
    enabled: bool,
    rotation_degrees: f64,
}

/// A heading-tracking cursor.
///
/// Interior-mutable so the host's tick loop and the follower can share one
/// instance behind an `Arc`. Starts disabled; while disabled, `tick` leaves
/// the rotation untouched.
#[derive(Debug)]
pub struct CompassCursor {
    state: Mutex<CursorState>,
}

impl Default for CompassCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl CompassCursor {
    /// Create a disabled cursor at rotation zero.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CursorState {
                enabled: false,
                rotation_degrees: 0.0,
            }),
        }
    }

    /// Toggle whether heading updates apply.
    pub fn set_enabled(&self, enabled: bool) {
        self.state.lock().enabled = enabled;
    }

    /// Whether heading updates currently apply.
    pub fn is_enabled(&self) -> bool {
        self.state.lock().enabled
    }

    /// Current visual rotation in degrees, [0, 360).
    pub fn rotation_degrees(&self) -> f64 {
        self.state.lock().rotation_degrees
    }

    /// Per-frame update: read the compass and face the heading.
    pub fn tick(&self, sensor: &dyn LocationSensor) {
        let mut state = self.state.lock();
        if state.enabled {
            state.rotation_degrees = rotation_for_heading(sensor.heading_degrees());
        }
    }
}
