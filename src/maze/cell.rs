use std::fmt;

/// One maze cell, stored as a nibble.
///
/// Only the up and left walls live in a cell; the right and down walls of a cell are the
/// left and up walls of its right and lower neighbors.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Wall between this cell and the cell above.
    pub const WALL_UP: u8 = 0b0001;
    /// Wall between this cell and the cell to the left.
    pub const WALL_LEFT: u8 = 0b0010;
    /// Not yet touched by carving.
    pub const FLAG_EMPTY: u8 = 0b0100;
    /// Part of the path being carved, or reached by the repair flood fill.
    pub const FLAG_VISITED: u8 = 0b1000;
    pub const WALL_MASK: u8 = Cell::WALL_UP | Cell::WALL_LEFT;
    pub const ALL_MASK: u8 = 0b1111;

    /// What out-of-bounds reads return: both walls up, no flags.
    pub const CLOSED: Cell = Cell(Cell::WALL_MASK);
    /// State of every cell at the start of a generation cycle.
    pub const FRESH: Cell = Cell(Cell::WALL_MASK | Cell::FLAG_EMPTY);

    /// Builds a cell from the low four bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        Cell(bits & Cell::ALL_MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn wall_up(self) -> bool {
        self.0 & Cell::WALL_UP != 0
    }

    pub const fn wall_left(self) -> bool {
        self.0 & Cell::WALL_LEFT != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 & Cell::FLAG_EMPTY != 0
    }

    pub const fn is_visited(self) -> bool {
        self.0 & Cell::FLAG_VISITED != 0
    }

    pub const fn with_wall_up(self, value: bool) -> Self {
        self.with(Cell::WALL_UP, value)
    }

    pub const fn with_wall_left(self, value: bool) -> Self {
        self.with(Cell::WALL_LEFT, value)
    }

    pub const fn with_empty(self, value: bool) -> Self {
        self.with(Cell::FLAG_EMPTY, value)
    }

    pub const fn with_visited(self, value: bool) -> Self {
        self.with(Cell::FLAG_VISITED, value)
    }

    const fn with(self, bit: u8, value: bool) -> Self {
        if value {
            Cell(self.0 | bit)
        } else {
            Cell(self.0 & !bit)
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("up", &self.wall_up())
            .field("left", &self.wall_left())
            .field("empty", &self.is_empty())
            .field("visited", &self.is_visited())
            .finish()
    }
}

/// The four sides of a cell.
///
/// The discriminants are the direction indices the carver draws from the random stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Side {
    /// Sides in carving index order.
    pub const ALL: [Side; 4] = [Side::Up, Side::Left, Side::Down, Side::Right];

    pub fn from_index(index: u8) -> Side {
        Side::ALL[(index & 0b11) as usize]
    }

    /// The coordinate across this side.
    ///
    /// NOTE: Stepping up or left from row/column 0 wraps to `u8::MAX`, which is never inside
    /// a maze (dimensions are at most `u8::MAX`), so it reads as out of bounds.
    pub fn step(self, (x, y): (u8, u8)) -> (u8, u8) {
        match self {
            Side::Up => (x, y.wrapping_sub(1)),
            Side::Left => (x.wrapping_sub(1), y),
            Side::Down => (x, y.saturating_add(1)),
            Side::Right => (x.saturating_add(1), y),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Up => write!(f, "up"),
            Side::Left => write!(f, "left"),
            Side::Down => write!(f, "down"),
            Side::Right => write!(f, "right"),
        }
    }
}
