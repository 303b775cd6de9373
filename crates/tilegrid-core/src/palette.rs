//! The [`Palette`] — the ordered collection of registered tile bitmaps.
//!
//! Slots are keyed by small non-negative integers. Index 0 is reserved to
//! mean "empty" at the grid level; it may hold a bitmap, but the renderer
//! never draws it.

use image::RgbaImage;

use crate::error::Error;
use crate::tiles::TileSource;

/// Fixed-capacity storage for rasterized tiles.
///
/// Replacing the palette with [`reset`](Palette::reset) discards all prior
/// bitmaps; it never touches the grid that refers to them.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    slots: Vec<Option<RgbaImage>>,
}

impl Palette {
    /// An empty palette with capacity 0. Every registration fails until
    /// [`reset`](Palette::reset) allocates slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the storage with `capacity` empty slots.
    pub fn reset(&mut self, capacity: usize) {
        self.slots = vec![None; capacity];
    }

    /// Number of slots (the exclusive upper bound for keys).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Rasterize `source` at `tile_size` and store it under `key`,
    /// replacing any previous bitmap for that key.
    pub fn register(
        &mut self,
        key: u16,
        source: &dyn TileSource,
        tile_size: u32,
    ) -> Result<(), Error> {
        let Some(slot) = self.slots.get_mut(key as usize) else {
            return Err(Error::OutOfRange {
                what: "palette key",
                value: key as i32,
                limit: self.slots.len() as i32,
            });
        };
        *slot = Some(source.rasterize(tile_size));
        Ok(())
    }

    /// The bitmap registered under `idx`, if any.
    #[inline]
    pub fn get(&self, idx: u16) -> Option<&RgbaImage> {
        self.slots.get(idx as usize)?.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::SolidTile;

    const RED: SolidTile = SolidTile::new([255, 0, 0, 255]);
    const BLUE: SolidTile = SolidTile::new([0, 0, 255, 255]);

    #[test]
    fn register_within_capacity() {
        let mut p = Palette::new();
        p.reset(5);
        for key in 0..5 {
            p.register(key, &RED, 4).unwrap();
        }
        assert_eq!(p.get(4).unwrap().dimensions(), (4, 4));
    }

    #[test]
    fn register_beyond_capacity_is_out_of_range() {
        let mut p = Palette::new();
        p.reset(5);
        p.register(1, &RED, 4).unwrap();
        assert_eq!(
            p.register(7, &BLUE, 4),
            Err(Error::OutOfRange {
                what: "palette key",
                value: 7,
                limit: 5,
            })
        );
    }

    #[test]
    fn register_before_reset_fails() {
        let mut p = Palette::new();
        assert!(matches!(
            p.register(0, &RED, 4),
            Err(Error::OutOfRange { limit: 0, .. })
        ));
    }

    #[test]
    fn reset_discards_prior_bitmaps() {
        let mut p = Palette::new();
        p.reset(3);
        p.register(2, &RED, 4).unwrap();
        p.reset(3);
        assert!(p.get(2).is_none());
    }

    #[test]
    fn register_replaces_existing_bitmap() {
        let mut p = Palette::new();
        p.reset(2);
        p.register(1, &RED, 4).unwrap();
        p.register(1, &BLUE, 4).unwrap();
        assert_eq!(p.get(1).unwrap().get_pixel(2, 2).0, [0, 0, 255, 255]);
    }

    #[test]
    fn unregistered_slot_reads_none() {
        let mut p = Palette::new();
        p.reset(3);
        assert!(p.get(0).is_none());
        assert!(p.get(9).is_none());
    }
}
