//! Tile sources — the "image resource" side of the renderer.
//!
//! A [`TileSource`] is anything that can rasterize itself into a square RGBA
//! bitmap of a requested size. The palette rasterizes each source exactly
//! once, at registration time, so render loops only ever touch cached
//! bitmaps.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage, imageops::FilterType};

use crate::error::Error;

/// An abstract image resource that can be rasterized at a given tile size.
pub trait TileSource {
    /// Render this source into an exactly `size × size` RGBA bitmap.
    fn rasterize(&self, size: u32) -> RgbaImage;
}

// ---------------------------------------------------------------------------
// SolidTile
// ---------------------------------------------------------------------------

/// A flat-colored tile with an optional one-pixel border.
///
/// Useful for block-puzzle boards and for tests; no image assets required.
#[derive(Debug, Clone, Copy)]
pub struct SolidTile {
    fill: [u8; 4],
    border: Option<[u8; 4]>,
}

impl SolidTile {
    /// A tile filled with a single RGBA color.
    pub const fn new(fill: [u8; 4]) -> Self {
        Self { fill, border: None }
    }

    /// Add a one-pixel border in the given color (builder).
    pub const fn with_border(mut self, border: [u8; 4]) -> Self {
        self.border = Some(border);
        self
    }
}

impl TileSource for SolidTile {
    fn rasterize(&self, size: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(size, size, Rgba(self.fill));
        if let Some(border) = self.border {
            if size > 0 {
                let b = Rgba(border);
                for i in 0..size {
                    img.put_pixel(i, 0, b);
                    img.put_pixel(i, size - 1, b);
                    img.put_pixel(0, i, b);
                    img.put_pixel(size - 1, i, b);
                }
            }
        }
        img
    }
}

// ---------------------------------------------------------------------------
// ImageTile
// ---------------------------------------------------------------------------

/// A tile backed by a decoded image, resampled to the tile size.
#[derive(Debug, Clone)]
pub struct ImageTile {
    image: DynamicImage,
}

impl ImageTile {
    /// Wrap an already decoded image.
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Decode a PNG from raw bytes.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| Error::InvalidConfiguration(format!("invalid PNG data: {e}")))?;
        Ok(Self { image })
    }
}

impl TileSource for ImageTile {
    fn rasterize(&self, size: u32) -> RgbaImage {
        self.image
            .resize_exact(size, size, FilterType::Nearest)
            .to_rgba8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_tile_fills_square() {
        let img = SolidTile::new([10, 20, 30, 255]).rasterize(8);
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(4, 4).0, [10, 20, 30, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn solid_tile_border_frames_the_edge() {
        let img = SolidTile::new([10, 20, 30, 255])
            .with_border([1, 2, 3, 255])
            .rasterize(8);
        assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3, 255]);
        assert_eq!(img.get_pixel(7, 3).0, [1, 2, 3, 255]);
        assert_eq!(img.get_pixel(4, 4).0, [10, 20, 30, 255]);
    }

    #[test]
    fn image_tile_resamples_to_tile_size() {
        let src = DynamicImage::new_rgba8(3, 7);
        let img = ImageTile::new(src).rasterize(16);
        assert_eq!(img.dimensions(), (16, 16));
    }

    #[test]
    fn bad_png_bytes_are_rejected() {
        let err = ImageTile::from_png_bytes(b"not a png").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }
}
