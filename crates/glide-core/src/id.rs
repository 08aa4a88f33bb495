//! Strongly-typed cell identifier.

use std::fmt;

/// Row-major linear index of a board cell (`row * cols + col`).
///
/// Every structure that is sized per cell (the board itself, the present
/// catalog lookup, the per-cell dominance indices) is addressed by this
/// index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub u32);

impl CellIndex {
    /// Build the index of `(row, col)` on a grid with `cols` columns.
    pub fn from_row_col(row: u32, col: u32, cols: u32) -> Self {
        Self(row * cols + col)
    }

    /// The index as a `usize`, for slice addressing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this cell on a grid with `cols` columns.
    pub fn row(self, cols: u32) -> u32 {
        self.0 / cols
    }

    /// Column of this cell on a grid with `cols` columns.
    pub fn col(self, cols: u32) -> u32 {
        self.0 % cols
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_roundtrip() {
        let idx = CellIndex::from_row_col(9, 6, 20);
        assert_eq!(idx, CellIndex(186));
        assert_eq!(idx.row(20), 9);
        assert_eq!(idx.col(20), 6);
    }
}
