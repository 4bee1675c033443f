use super::cell::Cell;

/// Packed cell storage: two nibbles per byte, even indices in the high nibble.
///
/// Nothing outside this type touches the raw bytes.
pub struct Grid {
    data: Box<[u8]>,
    width: u8,
    height: u8,
}

impl Grid {
    pub fn new(width: u8, height: u8, cell: Cell) -> Self {
        let len = (width as usize * height as usize).div_ceil(2);
        let data = vec![Grid::splat(cell.bits()); len].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn is_in_bounds(&self, (x, y): (u8, u8)) -> bool {
        x < self.width && y < self.height
    }

    fn ravel_index(&self, x: u8, y: u8) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copies a nibble into both halves of a byte.
    fn splat(nibble: u8) -> u8 {
        let nibble = nibble & Cell::ALL_MASK;
        nibble | nibble << 4
    }

    pub fn get(&self, coord: (u8, u8)) -> Cell {
        if !self.is_in_bounds(coord) {
            return Cell::CLOSED;
        }
        let idx = self.ravel_index(coord.0, coord.1);
        let byte = self.data[idx / 2];
        if idx & 1 == 1 {
            Cell::from_bits(byte)
        } else {
            Cell::from_bits(byte >> 4)
        }
    }

    pub fn set(&mut self, coord: (u8, u8), cell: Cell) {
        if !self.is_in_bounds(coord) {
            return;
        }
        let idx = self.ravel_index(coord.0, coord.1);
        let byte = &mut self.data[idx / 2];
        if idx & 1 == 1 {
            *byte = (*byte & 0b1111_0000) | cell.bits();
        } else {
            *byte = (*byte & 0b0000_1111) | cell.bits() << 4;
        }
    }

    /// Sets the `mask`ed bits of every cell to the corresponding bits of `value`.
    /// Bits outside the mask are left alone.
    pub fn fill(&mut self, value: Cell, mask: u8) {
        let mask = Grid::splat(mask);
        let value = Grid::splat(value.bits()) & mask;
        self.data
            .iter_mut()
            .for_each(|byte| *byte = (*byte & !mask) | value);
    }
}
