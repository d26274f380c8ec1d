//! Distance-gated map update loop.
//!
//! The follower is the long-lived process that keeps the displayed map
//! centered near the device. It is modeled as an explicit state machine:
//!
//! ```text
//! WaitingForPermission ──► WaitingForServiceReady ──► Active
//!         │                                             │
//!         └── permission denied ──► Finished            └── poll every 5 s
//! ```
//!
//! A single [`step`](MapFollower::step) advances the machine and reports
//! what the scheduler should do next (continue immediately, sleep, or
//! stop). The async [`run`](MapFollower::run) driver interprets outcomes
//! with `tokio::time::sleep`; tests call `step` directly and never wait.
//!
//! # Behavior
//!
//! Each active cycle reads the current fix, publishes it to the location
//! label at 6 decimals, computes the planar displacement from the last
//! fetched coordinate (4 decimals on the distance label), and when the
//! displacement reaches the 10 m threshold fetches a fresh map image and
//! swaps it into the display. Fetches are strictly sequential: the loop
//! does not advance while one is outstanding.
//!
//! The initial "last fetched" coordinate is (0, 0), so the first cycle
//! virtually always exceeds the threshold and populates the display.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::coord::Coordinate;
use crate::cursor::CompassCursor;
use crate::display::{DisplaySurface, MapSprite, SpriteError};
use crate::provider::{HttpClient, ProviderError, StaticMapProvider};
use crate::sensor::{LocationSensor, ServiceStatus};

/// Displacement that triggers a new map fetch, in meters.
pub const THRESHOLD_DISTANCE_M: f64 = 10.0;

/// Pause between active poll cycles.
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(5);

/// Pause between service readiness checks.
pub const SERVICE_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Follower lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking whether location access was granted.
    WaitingForPermission,
    /// Polling the location service until it reports running.
    WaitingForServiceReady,
    /// Polling fixes and updating the map.
    Active,
    /// Permanently stopped (permission denied).
    Finished,
}

/// What the scheduler should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step again immediately.
    Continue,
    /// Sleep for the given duration, then step again.
    Sleep(Duration),
    /// The follower has stopped; do not step again.
    Finished,
}

/// Why a fetch-and-swap cycle failed.
#[derive(Debug, Error)]
enum FetchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Sprite(#[from] SpriteError),
}

/// The map update loop.
///
/// Owns the display and provider; shares the sensor and cursor with the
/// host (both are typically `Arc`s).
pub struct MapFollower<S, C, D>
where
    S: LocationSensor,
    C: HttpClient,
    D: DisplaySurface,
{
    sensor: S,
    provider: StaticMapProvider<C>,
    display: D,
    cursor: Arc<CompassCursor>,
    phase: Phase,
    last_fetched: Coordinate,
}

impl<S, C, D> MapFollower<S, C, D>
where
    S: LocationSensor,
    C: HttpClient,
    D: DisplaySurface,
{
    /// Create a follower at the start of its lifecycle.
    ///
    /// The loading indicator is hidden and the distance label zeroed
    /// immediately, before the first step runs.
    pub fn new(
        sensor: S,
        provider: StaticMapProvider<C>,
        mut display: D,
        cursor: Arc<CompassCursor>,
    ) -> Self {
        display.set_loading(false);
        display.set_distance_text(&format_distance(0.0));

        Self {
            sensor,
            provider,
            display,
            cursor,
            phase: Phase::WaitingForPermission,
            last_fetched: Coordinate::default(),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Coordinate of the most recent successful fetch.
    pub fn last_fetched(&self) -> Coordinate {
        self.last_fetched
    }

    /// Advance the state machine by one step.
    pub fn step(&mut self) -> StepOutcome {
        match self.phase {
            Phase::WaitingForPermission => {
                if !self.sensor.permission_granted() {
                    // No retry and no user-visible error; the host simply
                    // never gets a map.
                    info!("location permission not granted, follower stopping");
                    self.phase = Phase::Finished;
                    return StepOutcome::Finished;
                }
                self.phase = Phase::WaitingForServiceReady;
                StepOutcome::Continue
            }
            Phase::WaitingForServiceReady => match self.sensor.status() {
                ServiceStatus::Running => {
                    info!("location service running, starting map updates");
                    self.cursor.set_enabled(true);
                    self.phase = Phase::Active;
                    StepOutcome::Continue
                }
                status => {
                    // Unbounded wait: a service stuck in Starting (or even
                    // Failed) is re-polled forever.
                    debug!(?status, "waiting for location service");
                    StepOutcome::Sleep(SERVICE_POLL_INTERVAL)
                }
            },
            Phase::Active => {
                self.poll_once();
                StepOutcome::Sleep(UPDATE_INTERVAL)
            }
            Phase::Finished => StepOutcome::Finished,
        }
    }

    /// Drive the follower to completion on the current task.
    pub async fn run(mut self) {
        loop {
            match self.step() {
                StepOutcome::Continue => {}
                StepOutcome::Sleep(duration) => tokio::time::sleep(duration).await,
                StepOutcome::Finished => return,
            }
        }
    }

    /// One active cycle: read, publish, and fetch if we moved far enough.
    fn poll_once(&mut self) {
        let current = self.sensor.last_fix();
        self.display
            .set_location_text(&format!("lat: {:.6}, lon: {:.6}", current.latitude, current.longitude));

        let distance = current.distance_m(&self.last_fetched);
        self.display.set_distance_text(&format_distance(distance));
        debug!(
            lat = current.latitude,
            lon = current.longitude,
            distance_m = distance,
            "position polled"
        );

        if distance >= THRESHOLD_DISTANCE_M {
            self.download_and_swap(current);
        }
    }

    /// Fetch a map centered on `center` and swap it into the display.
    ///
    /// On failure the previous image stays up and we try again on a later
    /// cycle, once the device has moved past the threshold again. Success
    /// or not, the cycle ends with the loading indicator hidden and the
    /// distance label reset.
    fn download_and_swap(&mut self, center: Coordinate) {
        self.display.set_loading(true);

        match self.fetch_sprite(center) {
            Ok(sprite) => {
                self.display.show_map(sprite);
                self.last_fetched = center;
                info!(lat = center.latitude, lon = center.longitude, "map image updated");
            }
            Err(e) => {
                warn!(error = %e, "map fetch failed, keeping previous image");
            }
        }

        self.display.set_distance_text(&format_distance(0.0));
        self.display.set_loading(false);
    }

    fn fetch_sprite(&self, center: Coordinate) -> Result<MapSprite, FetchError> {
        let bytes = self.provider.fetch(center)?;
        Ok(MapSprite::from_bytes(&bytes)?)
    }
}

/// Distance label text, 4 decimal digits.
fn format_distance(meters: f64) -> String {
    format!("{:.4} m", meters)
}
