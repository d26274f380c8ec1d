//! GeoFollow - a location-following static map display.
//!
//! This library keeps a displayed map image centered near a moving device:
//! a [`follower::MapFollower`] polls an injected [`sensor::LocationSensor`]
//! and, whenever the device has moved far enough from the last fetched
//! coordinate, downloads a fresh static map image and swaps it into an
//! injected [`display::DisplaySurface`]. A [`cursor::CompassCursor`]
//! rotates with the compass heading while the follower is active.
//!
//! All platform edges (GPS, rendering, HTTP transport) are traits, so the
//! same loop runs against real hardware, a replayed route, or test doubles.

pub mod config;
pub mod coord;
pub mod cursor;
pub mod display;
pub mod follower;
pub mod provider;
pub mod sensor;

/// Crate version, as baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
