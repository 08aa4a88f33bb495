//! Error types for board, catalog and layout construction.
//!
//! All of these are fatal input errors: construction either yields a fully
//! validated value or nothing. Out-of-range lookups on an already built
//! board are logic errors and panic instead.

use std::error::Error;
use std::fmt;

use glide_core::CellIndex;

/// Errors arising from [`Board::new`](crate::Board::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Attempted to construct a board with zero cells.
    EmptyBoard,
    /// `rows * cols` does not fit a [`CellIndex`].
    DimensionTooLarge {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
    },
    /// The cell vector does not have `rows * cols` entries.
    CellCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied cell vector.
        found: usize,
    },
    /// A cell index lies outside the grid.
    CellOutOfBounds {
        /// What the index was used for.
        what: &'static str,
        /// The offending index.
        cell: CellIndex,
        /// Number of cells on the board.
        cell_count: usize,
    },
    /// The starting cell is a wall or tree.
    StartOnSolid {
        /// Row of the start.
        row: u32,
        /// Column of the start.
        col: u32,
    },
    /// A teleport connection starts on a cell that is not a hole.
    ConnectionNotOnHole {
        /// Row of the connection source.
        row: u32,
        /// Column of the connection source.
        col: u32,
    },
    /// A teleport connection leads onto a wall or tree.
    DestinationOnSolid {
        /// Row of the connection destination.
        row: u32,
        /// Column of the connection destination.
        col: u32,
    },
    /// A hole has more than one outgoing connection.
    DuplicateConnection {
        /// Row of the hole.
        row: u32,
        /// Column of the hole.
        col: u32,
    },
    /// A hole has no outgoing connection.
    UnconnectedHole {
        /// Row of the hole.
        row: u32,
        /// Column of the hole.
        col: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { rows, cols } => {
                write!(f, "board of {rows} x {cols} cells is too large")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, got {found}")
            }
            Self::CellOutOfBounds {
                what,
                cell,
                cell_count,
            } => write!(f, "{what} {cell} out of bounds: [0, {cell_count})"),
            Self::StartOnSolid { row, col } => {
                write!(f, "start at row {row}, column {col} is a solid cell")
            }
            Self::ConnectionNotOnHole { row, col } => {
                write!(
                    f,
                    "connection starts at row {row}, column {col}, which is not a hole"
                )
            }
            Self::DestinationOnSolid { row, col } => {
                write!(
                    f,
                    "connection leads to row {row}, column {col}, which is a solid cell"
                )
            }
            Self::DuplicateConnection { row, col } => {
                write!(f, "hole at row {row}, column {col} has more than one connection")
            }
            Self::UnconnectedHole { row, col } => {
                write!(f, "found hole that has no connection at row {row}, column {col}")
            }
        }
    }
}

impl Error for BoardError {}

/// Errors arising from [`PresentCatalog::new`](crate::PresentCatalog::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// More presents than a [`PresentMask`](glide_core::PresentMask) can track.
    TooManyPresents {
        /// Number of presents supplied.
        count: usize,
        /// The mask width ceiling.
        max: u32,
    },
    /// The same cell was supplied twice.
    DuplicatePresent {
        /// The repeated cell.
        cell: CellIndex,
    },
    /// A present cell lies outside the grid.
    PresentOutOfBounds {
        /// The offending cell.
        cell: CellIndex,
        /// Number of cells on the board.
        cell_count: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPresents { count, max } => {
                write!(f, "there are too many presents on the board ({count} > {max})")
            }
            Self::DuplicatePresent { cell } => write!(f, "present at cell {cell} listed twice"),
            Self::PresentOutOfBounds { cell, cell_count } => {
                write!(f, "present cell {cell} out of bounds: [0, {cell_count})")
            }
        }
    }
}

impl Error for CatalogError {}

/// Errors arising from [`parse_layout`](crate::parse_layout).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no rows, or its first row is empty.
    NoRows,
    /// A row's width differs from the first row's.
    RaggedRow {
        /// Zero-based row number.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// A character that is not part of the layout alphabet.
    UnknownSymbol {
        /// The character.
        symbol: char,
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// No `P` on the layout.
    MissingStart,
    /// More than one `P` on the layout.
    MultipleStarts {
        /// Zero-based row of the second start.
        row: usize,
        /// Zero-based column of the second start.
        col: usize,
    },
    /// The grid failed board validation.
    Board(BoardError),
    /// The presents failed catalog validation.
    Catalog(CatalogError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "layout has no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} columns, expected {expected}"),
            Self::UnknownSymbol { symbol, row, col } => {
                write!(
                    f,
                    "could not parse character '{symbol}' at row {row}, column {col}"
                )
            }
            Self::MissingStart => write!(f, "could not find penguin on the board"),
            Self::MultipleStarts { row, col } => {
                write!(f, "second penguin found at row {row}, column {col}")
            }
            Self::Board(e) => write!(f, "board: {e}"),
            Self::Catalog(e) => write!(f, "presents: {e}"),
        }
    }
}

impl Error for LayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            Self::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for LayoutError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<CatalogError> for LayoutError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}
