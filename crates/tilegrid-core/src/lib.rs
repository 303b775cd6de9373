//! **tilegrid-core** — a grid-based tile renderer (core types).
//!
//! This crate provides the platform-free half of the *tilegrid* workspace:
//! a palette of fixed-size square bitmaps keyed by small integer indices, a
//! 2D grid of indices describing what to draw where, and the [`TileView`]
//! renderer that paints every non-empty cell at its computed pixel position
//! on each draw request.
//!
//! Host windowing frameworks plug in through two seams: [`TileSource`] (an
//! abstract image resource that rasterizes itself at the tile size) and
//! [`Surface`] (an abstract drawing surface that accepts tile blits). The
//! `tilegrid-winit` crate provides a native windowed host; any 2D drawing
//! API satisfies the same pair.

pub mod error;
pub mod geom;
pub mod grid;
pub mod palette;
pub mod surface;
pub mod tiles;
pub mod view;

pub use error::Error;
pub use geom::Point;
pub use grid::IndexGrid;
pub use palette::Palette;
pub use surface::Surface;
pub use tiles::{ImageTile, SolidTile, TileSource};
pub use view::{TileView, ViewConfig};
