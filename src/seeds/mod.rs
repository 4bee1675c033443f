mod glyphs;

pub use glyphs::{AM, BLANK, DIGITS, HEART, PM, ROCKET, SMILEY};

use crate::maze::{Maze, Side};

/// A constant wall pattern stamped into a maze before carving.
///
/// Each cell takes two bits, packed four cells to a byte with the first cell in the most
/// significant pair, row by row. A set bit keeps the wall; a cleared bit removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPattern {
    pub width: u8,
    pub height: u8,
    pub data: &'static [u8],
}

impl SeedPattern {
    /// Keep the left wall of the cell.
    pub const KEEP_LEFT: u8 = 0b10;
    /// Keep the up wall of the cell.
    pub const KEEP_UP: u8 = 0b01;

    pub const fn new(width: u8, height: u8, data: &'static [u8]) -> Self {
        SeedPattern {
            width,
            height,
            data,
        }
    }

    /// Number of cells covered by the pattern.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the two pattern bits of the cell at `(dx, dy)` relative to the pattern origin.
    pub fn bits(&self, dx: u8, dy: u8) -> u8 {
        let flat = dy as usize * self.width as usize + dx as usize;
        let shift = (3 - flat % 4) * 2;
        (self.data[flat / 4] >> shift) & 0b11
    }
}

impl Maze {
    /// Stamps `pattern` with its top-left corner at `origin`.
    ///
    /// Every removed wall also clears the empty flag on both cells it separated. Expects a
    /// freshly reset maze; stamping after carving started is not supported.
    pub fn paste_seed(&mut self, origin: (u8, u8), pattern: &SeedPattern) {
        debug_assert!(
            origin.0 as usize + pattern.width as usize <= self.width() as usize
                && origin.1 as usize + pattern.height as usize <= self.height() as usize,
            "Seed of {}x{} at {:?} does not fit in a {}x{} maze",
            pattern.width,
            pattern.height,
            origin,
            self.width(),
            self.height()
        );
        debug_assert!(
            pattern.data.len() * 4 >= pattern.area(),
            "Seed data covers {} cells but the pattern is {}x{}",
            pattern.data.len() * 4,
            pattern.width,
            pattern.height
        );

        for dy in 0..pattern.height {
            for dx in 0..pattern.width {
                let coord = (origin.0 + dx, origin.1 + dy);
                let bits = pattern.bits(dx, dy);
                if bits & SeedPattern::KEEP_LEFT == 0 {
                    self.knock_down_seeded(coord, Side::Left);
                }
                if bits & SeedPattern::KEEP_UP == 0 {
                    self.knock_down_seeded(coord, Side::Up);
                }
            }
        }
    }

    fn knock_down_seeded(&mut self, coord: (u8, u8), side: Side) {
        self.set_wall(coord, side, false);
        self.set_empty(coord, false);
        // Out-of-bounds neighbors are ignored by `set_empty`
        self.set_empty(side.step(coord), false);
    }
}
