//! Decoded map sprite.

use image::DynamicImage;
use thiserror::Error;

/// Edge length in pixels of the on-screen map sprite.
///
/// The fetched image is 640x640; the surface stretches it to cover this
/// square with its origin at the bottom-left corner.
pub const MAP_SPRITE_SIZE: u32 = 960;

/// Errors that can occur while building a sprite.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// The response bytes were not a decodable image.
    #[error("failed to decode map image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded map image ready for display.
///
/// Wraps the decoded bitmap together with the fixed display geometry. The
/// underlying pixel buffer is freed when the sprite is dropped, so a
/// surface that replaces its sprite releases the old bitmap implicitly.
#[derive(Debug)]
pub struct MapSprite {
    image: DynamicImage,
}

impl MapSprite {
    /// Decode raw image bytes (PNG/JPEG as served by the map endpoint).
    pub fn from_bytes(data: &[u8]) -> Result<Self, SpriteError> {
        let image = image::load_from_memory(data)?;
        Ok(Self { image })
    }

    /// The decoded bitmap.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Width of the source bitmap in pixels.
    pub fn source_width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the source bitmap in pixels.
    pub fn source_height(&self) -> u32 {
        self.image.height()
    }

    /// Edge length the sprite covers on screen.
    pub fn display_size(&self) -> u32 {
        MAP_SPRITE_SIZE
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    /// Encode a tiny solid PNG for decode tests.
    pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([0, 128, 255, 255]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .expect("encoding a PNG in memory cannot fail");
        buf.into_inner()
    }

    #[test]
    fn test_decodes_png_bytes() {
        let sprite = MapSprite::from_bytes(&png_bytes(4, 2)).unwrap();
        assert_eq!(sprite.source_width(), 4);
        assert_eq!(sprite.source_height(), 2);
    }

    #[test]
    fn test_display_size_is_fixed() {
        let sprite = MapSprite::from_bytes(&png_bytes(1, 1)).unwrap();
        assert_eq!(sprite.display_size(), MAP_SPRITE_SIZE);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = MapSprite::from_bytes(&[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, SpriteError::Decode(_)));
    }

    #[test]
    fn test_decode_result_is_debuggable() {
        // Both arms of the decode result need to format in assertions.
        let ok = MapSprite::from_bytes(&png_bytes(1, 1));
        assert!(format!("{:?}", ok).contains("MapSprite"));

        let err = MapSprite::from_bytes(&[]);
        assert!(format!("{:?}", err).contains("Decode"));
    }
}
