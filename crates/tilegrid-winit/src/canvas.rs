//! CPU pixel canvas backing the softbuffer surface.
//!
//! Implements the core [`Surface`] trait over a window-sized `u32` ARGB
//! buffer: tiles are alpha-blended in at their pixel origins, and the whole
//! canvas is copied into the softbuffer frame on present.

use image::RgbaImage;
use tilegrid_core::{Point, Surface};

/// Opaque black, the canvas fill when nothing else is specified.
pub const BLACK: u32 = 0xFF00_0000;

/// A window-sized 0xAARRGGBB pixel buffer.
pub struct PixelCanvas {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl PixelCanvas {
    /// Create a canvas of the given pixel dimensions, cleared to black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![BLACK; width * height],
            width,
            height,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize the canvas, clearing it to black.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, BLACK);
        self.pixels.fill(BLACK);
    }

    /// Fill the whole canvas with one ARGB color.
    pub fn clear(&mut self, argb: u32) {
        self.pixels.fill(argb);
    }

    /// The pixel at `(x, y)`, if inside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Copy the canvas into a softbuffer frame, clearing any margin the
    /// canvas does not cover.
    pub fn blit_to_buffer(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let copy_w = self.width.min(buf_width);
        let copy_h = self.height.min(buf_height);

        if buf_width > self.width || buf_height > self.height {
            buf.fill(BLACK);
        }

        for y in 0..copy_h {
            let src_start = y * self.width;
            let dst_start = y * buf_width;
            let src_end = src_start + copy_w;
            let dst_end = dst_start + copy_w;
            if src_end <= self.pixels.len() && dst_end <= buf.len() {
                buf[dst_start..dst_end].copy_from_slice(&self.pixels[src_start..src_end]);
            }
        }
    }
}

impl Surface for PixelCanvas {
    fn draw_tile(&mut self, tile: &RgbaImage, origin: Point) {
        let (tw, th) = tile.dimensions();
        for ty in 0..th {
            let py = origin.y + ty as i32;
            if py < 0 || py as usize >= self.height {
                continue;
            }
            for tx in 0..tw {
                let px = origin.x + tx as i32;
                if px < 0 || px as usize >= self.width {
                    continue;
                }
                let [r, g, b, a] = tile.get_pixel(tx, ty).0;
                if a == 0 {
                    continue;
                }
                let idx = (py as usize) * self.width + (px as usize);
                let dst = self.pixels[idx];
                let (dr, dg, db) = ((dst >> 16) & 0xFF, (dst >> 8) & 0xFF, dst & 0xFF);
                let (a, inv_a) = (a as u32, 255 - a as u32);
                let r = (r as u32 * a + dr * inv_a) / 255;
                let g = (g as u32 * a + dg * inv_a) / 255;
                let b = (b as u32 * a + db * inv_a) / 255;
                self.pixels[idx] = 0xFF00_0000 | (r << 16) | (g << 8) | b;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(size: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba(rgba))
    }

    #[test]
    fn opaque_tile_replaces_pixels() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.draw_tile(&solid(2, [0x10, 0x20, 0x30, 0xFF]), Point::new(3, 4));
        assert_eq!(canvas.pixel(3, 4), Some(0xFF10_2030));
        assert_eq!(canvas.pixel(4, 5), Some(0xFF10_2030));
        // Outside the tile footprint the canvas stays black.
        assert_eq!(canvas.pixel(2, 4), Some(BLACK));
        assert_eq!(canvas.pixel(5, 4), Some(BLACK));
    }

    #[test]
    fn transparent_pixels_leave_the_canvas_alone() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.clear(0xFFAB_CDEF);
        canvas.draw_tile(&solid(2, [1, 2, 3, 0]), Point::new(0, 0));
        assert_eq!(canvas.pixel(0, 0), Some(0xFFAB_CDEF));
    }

    #[test]
    fn half_alpha_blends_toward_the_tile() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.clear(BLACK);
        canvas.draw_tile(&solid(1, [0xFF, 0xFF, 0xFF, 0x80]), Point::new(0, 0));
        let px = canvas.pixel(0, 0).unwrap();
        let r = (px >> 16) & 0xFF;
        // 255 * 128 / 255 = 128
        assert_eq!(r, 0x80);
    }

    #[test]
    fn tiles_are_clipped_at_the_edges() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.draw_tile(&solid(3, [9, 9, 9, 0xFF]), Point::new(-1, 2));
        assert_eq!(canvas.pixel(0, 2), Some(0xFF09_0909));
        assert_eq!(canvas.pixel(1, 3), Some(0xFF09_0909));
        // Nothing above the origin row.
        assert_eq!(canvas.pixel(0, 1), Some(BLACK));
    }

    #[test]
    fn blit_clears_margin_on_larger_target() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.clear(0xFF11_1111);
        let mut buf = vec![0u32; 3 * 3];
        canvas.blit_to_buffer(&mut buf, 3, 3);
        assert_eq!(buf[0], 0xFF11_1111);
        assert_eq!(buf[1], 0xFF11_1111);
        assert_eq!(buf[2], BLACK);
        assert_eq!(buf[8], BLACK);
    }

    #[test]
    fn blit_truncates_on_smaller_target() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.clear(0xFF22_2222);
        let mut buf = vec![0u32; 2 * 2];
        canvas.blit_to_buffer(&mut buf, 2, 2);
        assert!(buf.iter().all(|&p| p == 0xFF22_2222));
    }
}
