//! Location and compass sensor abstraction.
//!
//! The follower and cursor never talk to a platform location service
//! directly. They are constructor-injected with a [`LocationSensor`], which
//! allows mock sensors in tests and replay sensors on platforms without a
//! GPS (see [`ScriptedSensor`]).

mod scripted;

pub use scripted::ScriptedSensor;

use crate::coord::Coordinate;

/// Lifecycle state of the platform location service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Service has not been started.
    NotStarted,
    /// Service is initializing and has no fix yet.
    Starting,
    /// Service is delivering fixes.
    Running,
    /// Service failed to start.
    Failed,
}

/// Trait for location/compass sensor access.
///
/// Implementations are expected to be cheap to poll; `last_fix` and
/// `heading_degrees` return last-known values rather than blocking on
/// fresh hardware reads.
pub trait LocationSensor: Send + Sync {
    /// Whether the user has granted location access.
    fn permission_granted(&self) -> bool;

    /// Current lifecycle state of the location service.
    fn status(&self) -> ServiceStatus;

    /// Last-known geographic fix.
    fn last_fix(&self) -> Coordinate;

    /// Last-known compass heading in degrees, [0, 360) clockwise from north.
    fn heading_degrees(&self) -> f64;
}

// A shared sensor is still a sensor; the follower and the cursor's tick
// loop typically hold clones of the same Arc.
impl<T: LocationSensor + ?Sized> LocationSensor for std::sync::Arc<T> {
    fn permission_granted(&self) -> bool {
        (**self).permission_granted()
    }

    fn status(&self) -> ServiceStatus {
        (**self).status()
    }

    fn last_fix(&self) -> Coordinate {
        (**self).last_fix()
    }

    fn heading_degrees(&self) -> f64 {
        (**self).heading_degrees()
    }
}
