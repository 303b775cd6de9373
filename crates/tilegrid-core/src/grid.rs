//! The [`IndexGrid`] type — a 2D grid of palette indices.
//!
//! Each cell holds either 0 (empty, never drawn) or the index of a palette
//! tile. The grid is a plain owned buffer; unlike the bitmaps it refers to,
//! it is cheap to reallocate and is cleared to all-zero on every resize.

use crate::error::Error;

/// A 2D array of tile indices backed by a flat row-major buffer.
#[derive(Debug, Clone)]
pub struct IndexGrid {
    cells: Vec<u16>,
    width: i32,
    height: i32,
}

impl IndexGrid {
    /// Create a new grid of the given dimensions, filled with 0.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![0; (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    /// Width in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Read the index at `(x, y)`. Returns `None` outside bounds.
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> Option<u16> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write `idx` at `(x, y)`, failing with [`Error::OutOfRange`] for
    /// coordinates outside the grid.
    pub fn set(&mut self, x: i32, y: i32, idx: u16) -> Result<(), Error> {
        if x < 0 || x >= self.width {
            return Err(Error::OutOfRange {
                what: "grid x",
                value: x,
                limit: self.width,
            });
        }
        if y < 0 || y >= self.height {
            return Err(Error::OutOfRange {
                what: "grid y",
                value: y,
                limit: self.height,
            });
        }
        // In range, the flat index is always valid.
        if let Some(i) = self.index(x, y) {
            self.cells[i] = idx;
        }
        Ok(())
    }

    /// Fill every cell with `idx`.
    pub fn fill(&mut self, idx: u16) {
        self.cells.fill(idx);
    }

    /// Row-major iterator over `(x, y, index)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, u16)> + '_ {
        let w = self.width;
        self.cells.iter().enumerate().map(move |(i, &idx)| {
            let x = (i as i32) % w;
            let y = (i as i32) / w;
            (x, y, idx)
        })
    }
}
