//! The drawing-surface capability.
//!
//! The renderer does not know about windows, canvases, or pixel formats; it
//! only emits tile blits through this trait. Graphical hosts implement it
//! over their own framebuffer (see `tilegrid-winit`'s `PixelCanvas`), and
//! tests implement it with a recorder.

use image::RgbaImage;

use crate::geom::Point;

/// A destination for tile blits.
pub trait Surface {
    /// Draw a pre-rasterized tile with its top-left corner at `origin`,
    /// in pixel coordinates. Tiles never overlap within one render pass,
    /// so implementations are free to reorder or batch draws.
    fn draw_tile(&mut self, tile: &RgbaImage, origin: Point);
}
