//! Walled Tetris-style board demo using winit + softbuffer.
//!
//! Draws the classic 12 x 22 board: a one-tile wall border around a 10 x 20
//! well, with deterministic debris rows in the lower half.
//!
//! Run: cargo run --bin board-winit

use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};
use tilegrid_core::{Error, SolidTile, TileView};
use tilegrid_winit::{Scene, WinitConfig, WinitDriver};

const WALL: u16 = 1;
const FIRST_PIECE: u16 = 2;

/// One color per tetromino kind.
const PIECE_COLORS: [[u8; 4]; 7] = [
    [0x00, 0xF0, 0xF0, 0xFF], // I
    [0xF0, 0xF0, 0x00, 0xFF], // O
    [0xA0, 0x00, 0xF0, 0xFF], // T
    [0x00, 0xF0, 0x00, 0xFF], // S
    [0xF0, 0x00, 0x00, 0xFF], // Z
    [0x00, 0x00, 0xF0, 0xFF], // J
    [0xF0, 0xA0, 0x00, 0xFF], // L
];

struct Board {
    seed: u64,
}

impl Scene for Board {
    fn init(&mut self, view: &mut TileView) -> Result<(), Error> {
        view.reset_palette(2 + PIECE_COLORS.len());
        view.register_tile(
            WALL,
            &SolidTile::new([0x80, 0x80, 0x80, 0xFF]).with_border([0x50, 0x50, 0x50, 0xFF]),
        )?;
        for (i, color) in PIECE_COLORS.iter().enumerate() {
            view.register_tile(
                FIRST_PIECE + i as u16,
                &SolidTile::new(*color).with_border([0x20, 0x20, 0x20, 0xFF]),
            )?;
        }
        Ok(())
    }

    fn frame(&mut self, view: &mut TileView) -> Result<(), Error> {
        let (xc, yc) = (view.config().x_tile_count, view.config().y_tile_count);
        view.clear();

        // Wall border.
        for x in 0..xc {
            view.set_tile(WALL, x, 0)?;
            view.set_tile(WALL, x, yc - 1)?;
        }
        for y in 0..yc {
            view.set_tile(WALL, 0, y)?;
            view.set_tile(WALL, xc - 1, y)?;
        }

        // Debris in the lower half of the well. Reseeding keeps the board
        // stable across redraws.
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for y in yc / 2..yc - 1 {
            for x in 1..xc - 1 {
                if rng.random_range(0..3) > 0 {
                    let piece = FIRST_PIECE + rng.random_range(0..PIECE_COLORS.len()) as u16;
                    view.set_tile(piece, x, y)?;
                }
            }
        }
        Ok(())
    }
}

fn main() {
    let driver = WinitDriver::new(WinitConfig {
        title: "tilegrid board".into(),
        ..Default::default()
    });

    if let Err(e) = driver.run(Box::new(Board { seed: 0xDEBB1E })) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
