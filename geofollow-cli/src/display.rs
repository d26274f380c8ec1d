//! File-backed display surface.
//!
//! The desktop has no sprite renderer, so the "display" is a PNG on disk
//! plus log lines for the two labels and the loading indicator. The
//! previous sprite is dropped before the new one is installed, matching
//! the release-before-replace discipline the trait asks for.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use geofollow::display::{DisplaySurface, MapSprite};

/// Writes each fetched map image to a fixed path and logs label updates.
pub struct FileDisplay {
    output: PathBuf,
    sprite: Option<MapSprite>,
}

impl FileDisplay {
    /// Create a display writing map images to `output` (a PNG path).
    pub fn new(output: PathBuf) -> Self {
        Self {
            output,
            sprite: None,
        }
    }

    /// Whether a map image is currently installed.
    pub fn has_map(&self) -> bool {
        self.sprite.is_some()
    }
}

impl DisplaySurface for FileDisplay {
    fn show_map(&mut self, sprite: MapSprite) {
        // Free the old bitmap before installing the new one.
        self.sprite = None;

        if let Err(e) = sprite.image().save(&self.output) {
            warn!(error = %e, path = %self.output.display(), "failed to write map image");
        } else {
            info!(
                path = %self.output.display(),
                source = %format!("{}x{}", sprite.source_width(), sprite.source_height()),
                display = sprite.display_size(),
                "map image updated"
            );
        }
        self.sprite = Some(sprite);
    }

    fn set_location_text(&mut self, text: &str) {
        info!(location = text, "location label");
    }

    fn set_distance_text(&mut self, text: &str) {
        info!(distance = text, "distance label");
    }

    fn set_loading(&mut self, visible: bool) {
        debug!(visible, "loading indicator");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn sprite() -> MapSprite {
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        MapSprite::from_bytes(&buf.into_inner()).unwrap()
    }

    #[test]
    fn test_show_map_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        let mut display = FileDisplay::new(path.clone());

        assert!(!display.has_map());
        display.show_map(sprite());

        assert!(display.has_map());
        assert!(path.exists());
        // Written file decodes back to the source bitmap dimensions.
        let written = image::open(&path).unwrap();
        assert_eq!(written.width(), 2);
        assert_eq!(written.height(), 2);
    }

    #[test]
    fn test_show_map_replaces_previous_sprite() {
        let dir = tempfile::tempdir().unwrap();
        let mut display = FileDisplay::new(dir.path().join("map.png"));

        display.show_map(sprite());
        display.show_map(sprite());
        assert!(display.has_map());
    }

    #[test]
    fn test_unwritable_path_does_not_panic() {
        let mut display = FileDisplay::new(PathBuf::from("/nonexistent/dir/map.png"));
        display.show_map(sprite());
        // The sprite is still installed even though the write failed.
        assert!(display.has_map());
    }
}
