//! The four slide directions and their move-string symbols.

use std::fmt;

/// Cardinal direction of a slide.
///
/// Move paths are recorded as strings of [`symbol`](Direction::symbol)s,
/// e.g. `"ULDR"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Towards row 0.
    Up = 0,
    /// Towards the last row.
    Down = 1,
    /// Towards column 0.
    Left = 2,
    /// Towards the last column.
    Right = 3,
}

impl Direction {
    /// All directions, in the order the search expands them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the (row_offset, col_offset) for this direction.
    pub fn offset_2d(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Single-character symbol used in move strings.
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Parse a move-string symbol. Returns `None` for anything but `U`, `D`, `L`, `R`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_symbol(dir.symbol()), Some(dir));
        }
        assert_eq!(Direction::from_symbol('u'), None);
        assert_eq!(Direction::from_symbol('X'), None);
    }

    #[test]
    fn offsets_are_unit_steps() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset_2d();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }
}
