//! The [`TileView`] renderer — palette + grid + layout, painted on demand.
//!
//! A `TileView` owns a [`Palette`] of pre-rasterized square bitmaps and an
//! [`IndexGrid`] describing what to draw where. The host framework drives
//! it serially on one thread: size-change notifications go to
//! [`on_resize`](TileView::on_resize), draw requests to
//! [`render`](TileView::render). Behavior is purely a function of the
//! current grid/palette contents and the last computed offsets.

use crate::error::Error;
use crate::geom::Point;
use crate::grid::IndexGrid;
use crate::palette::Palette;
use crate::surface::Surface;
use crate::tiles::TileSource;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Layout configuration, fixed at construction.
///
/// All sizing state is instance-owned; two views never interfere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewConfig {
    /// Tile scale factor applied on top of the display-derived size.
    pub scale: f64,
    /// Horizontal positioning divisor. 0 disables horizontal centering
    /// entirely (the x offset stays 0).
    pub pos_divisor: i32,
    /// Number of tile columns.
    pub x_tile_count: i32,
    /// Number of tile rows.
    pub y_tile_count: i32,
}

impl Default for ViewConfig {
    /// A 10 × 20 playfield plus a one-cell wall border on each side.
    fn default() -> Self {
        Self {
            scale: 1.0,
            pos_divisor: 0,
            x_tile_count: 12,
            y_tile_count: 22,
        }
    }
}

// ---------------------------------------------------------------------------
// TileView
// ---------------------------------------------------------------------------

/// A grid-of-tiles renderer.
#[derive(Debug, Clone)]
pub struct TileView {
    config: ViewConfig,
    tile_size: i32,
    x_offset: i32,
    y_offset: i32,
    palette: Palette,
    grid: Option<IndexGrid>,
}

impl TileView {
    /// Create a view whose tile size is derived from the display height:
    /// `trunc(floor(display_height_px / y_tile_count) * 0.9 * scale)`.
    pub fn new(config: ViewConfig, display_height_px: i32) -> Result<Self, Error> {
        Self::check_counts(&config)?;
        let per_tile = display_height_px / config.y_tile_count;
        let tile_size = (per_tile as f64 * 0.9 * config.scale) as i32;
        Self::with_tile_size(config, tile_size)
    }

    /// Create a view with an explicit tile size in pixels.
    pub fn with_tile_size(config: ViewConfig, tile_size: i32) -> Result<Self, Error> {
        Self::check_counts(&config)?;
        if tile_size <= 0 {
            return Err(Error::InvalidConfiguration(format!(
                "tile size must be positive, got {tile_size}"
            )));
        }
        Ok(Self {
            config,
            tile_size,
            x_offset: 0,
            y_offset: 0,
            palette: Palette::new(),
            grid: None,
        })
    }

    fn check_counts(config: &ViewConfig) -> Result<(), Error> {
        if config.x_tile_count <= 0 || config.y_tile_count <= 0 {
            return Err(Error::InvalidConfiguration(format!(
                "tile counts must be positive, got {} x {}",
                config.x_tile_count, config.y_tile_count
            )));
        }
        Ok(())
    }

    /// The layout configuration.
    #[inline]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Tile edge length in pixels. Positive, identical for every tile.
    #[inline]
    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// The pixel translation applied to grid coordinate (0, 0), as last
    /// computed by [`on_resize`](TileView::on_resize).
    #[inline]
    pub fn offset(&self) -> Point {
        Point::new(self.x_offset, self.y_offset)
    }

    /// Replace the palette with `capacity` empty slots, discarding all
    /// previously registered bitmaps. The grid is untouched.
    pub fn reset_palette(&mut self, capacity: usize) {
        self.palette.reset(capacity);
    }

    /// Rasterize `source` at the tile size and store it under `key`.
    ///
    /// Fails with [`Error::OutOfRange`] when `key` is outside the palette
    /// capacity set by [`reset_palette`](TileView::reset_palette).
    pub fn register_tile(&mut self, key: u16, source: &dyn TileSource) -> Result<(), Error> {
        self.palette.register(key, source, self.tile_size as u32)
    }

    /// Handle a size-change notification from the host framework.
    ///
    /// Recomputes the pixel offsets for the new view size and reallocates
    /// the grid to all-zero.
    pub fn on_resize(&mut self, width: i32, height: i32) {
        let ts = self.tile_size;
        let pos = self.config.pos_divisor;
        // Divisor 0 means horizontal centering is disabled, not a division
        // by zero.
        self.x_offset = if pos == 0 {
            0
        } else {
            (width - width / pos) + (width - ts * self.config.x_tile_count) / (2 * pos)
        };
        self.y_offset = (height - ts * self.config.y_tile_count) / 2;
        self.grid = Some(IndexGrid::new(
            self.config.x_tile_count,
            self.config.y_tile_count,
        ));
    }

    /// Write `idx` into the grid at `(x, y)`, to be drawn on the next
    /// render. Index 0 marks the cell empty.
    ///
    /// Allocates the grid (all zeros) on first use. Fails with
    /// [`Error::OutOfRange`] for coordinates outside the tile counts or an
    /// index beyond the palette capacity.
    pub fn set_tile(&mut self, idx: u16, x: i32, y: i32) -> Result<(), Error> {
        if idx > 0 && idx as usize >= self.palette.capacity() {
            return Err(Error::OutOfRange {
                what: "tile index",
                value: idx as i32,
                limit: self.palette.capacity() as i32,
            });
        }
        let (xc, yc) = (self.config.x_tile_count, self.config.y_tile_count);
        let grid = self.grid.get_or_insert_with(|| IndexGrid::new(xc, yc));
        grid.set(x, y, idx)
    }

    /// Mark every grid cell empty, through the same write path as
    /// [`set_tile`](TileView::set_tile).
    pub fn clear(&mut self) {
        for x in 0..self.config.x_tile_count {
            for y in 0..self.config.y_tile_count {
                // In-range coordinates and index 0 cannot fail.
                let _ = self.set_tile(0, x, y);
            }
        }
    }

    /// Read back the index at `(x, y)`. `None` when the grid is not yet
    /// allocated or the coordinates are outside it.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<u16> {
        self.grid.as_ref()?.at(x, y)
    }

    /// Paint every non-empty cell onto `surface`: the tile for index `i`
    /// at cell `(x, y)` lands at pixel
    /// `(x_offset + x * tile_size, y_offset + y * tile_size)`.
    ///
    /// Fails with [`Error::NotConfigured`] when no grid has been allocated
    /// yet, or when a non-empty cell references a palette slot without a
    /// registered bitmap.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), Error> {
        let grid = self
            .grid
            .as_ref()
            .ok_or(Error::NotConfigured("grid (no resize or tile write yet)"))?;
        for (x, y, idx) in grid.iter() {
            if idx == 0 {
                continue;
            }
            let tile = self
                .palette
                .get(idx)
                .ok_or(Error::NotConfigured("palette bitmap for non-empty cell"))?;
            let origin = Point::new(
                self.x_offset + x * self.tile_size,
                self.y_offset + y * self.tile_size,
            );
            surface.draw_tile(tile, origin);
        }
        Ok(())
    }
}
