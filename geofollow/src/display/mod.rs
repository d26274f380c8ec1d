//! Display surface abstraction.
//!
//! The follower renders through a [`DisplaySurface`] implemented by the
//! host: a GUI on a device, a terminal/file adapter on the desktop, or a
//! recording double in tests. Map images are handed over by value so the
//! implementation drops the previous bitmap before installing the new one.

mod sprite;

pub use sprite::{MapSprite, SpriteError, MAP_SPRITE_SIZE};

#[cfg(test)]
pub(crate) use sprite::tests::png_bytes;

/// Rendering host for the follower.
pub trait DisplaySurface: Send {
    /// Replace the displayed map image.
    ///
    /// Ownership of the sprite transfers to the surface; the previously
    /// installed sprite must be released before the new one is shown.
    fn show_map(&mut self, sprite: MapSprite);

    /// Update the current-location label.
    fn set_location_text(&mut self, text: &str);

    /// Update the traveled-distance label.
    fn set_distance_text(&mut self, text: &str);

    /// Show or hide the download-in-progress indicator.
    fn set_loading(&mut self, visible: bool);
}
