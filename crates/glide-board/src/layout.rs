//! Text layouts.
//!
//! A layout is a list of equally wide rows using this alphabet:
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `#`    | wall |
//! | `T`    | tree |
//! | ` `    | empty ice |
//! | `X`    | target |
//! | `O`    | hole |
//! | `P`    | penguin start (empty ice) |
//! | `$`    | present (empty ice) |
//!
//! Hole connections are given separately as `(from, to)` pairs of linear
//! cell indices.

use crate::board::Board;
use crate::catalog::PresentCatalog;
use crate::edge::EdgeBehavior;
use crate::error::LayoutError;
use glide_core::{CellIndex, CellKind};

/// A parsed board together with its present catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    /// The board.
    pub board: Board,
    /// Presents found on the board, in row-major order.
    pub catalog: PresentCatalog,
}

/// Parse a text layout into a [`Puzzle`].
///
/// # Errors
///
/// Returns a [`LayoutError`] for empty or ragged layouts, unknown symbols,
/// a missing or repeated start, and anything [`Board::new`] or
/// [`PresentCatalog::new`] rejects.
///
/// # Examples
///
/// ```
/// use glide_board::{parse_layout, EdgeBehavior};
/// use glide_core::{CellIndex, CellKind};
///
/// let puzzle = parse_layout(
///     &["#####", "#P$O#", "#X  #", "#####"],
///     &[(8, 12)],
///     EdgeBehavior::Absorb,
/// )
/// .unwrap();
/// assert_eq!(puzzle.board.rows(), 4);
/// assert_eq!(puzzle.board.start(), CellIndex(6));
/// assert_eq!(puzzle.board.piece_at(CellIndex(11)), CellKind::Target);
/// assert_eq!(puzzle.catalog.positions(), &[CellIndex(7)]);
/// ```
pub fn parse_layout(
    rows: &[&str],
    connections: &[(u32, u32)],
    edge: EdgeBehavior,
) -> Result<Puzzle, LayoutError> {
    let width = rows.first().map_or(0, |r| r.chars().count());
    if width == 0 {
        return Err(LayoutError::NoRows);
    }

    let mut cells = Vec::with_capacity(rows.len() * width);
    let mut presents = Vec::new();
    let mut start = None;
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(LayoutError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        for (col, symbol) in line.chars().enumerate() {
            let kind = match symbol {
                '#' => CellKind::Wall,
                'T' => CellKind::Tree,
                ' ' => CellKind::Empty,
                'X' => CellKind::Target,
                'O' => CellKind::HoleEntrance,
                'P' => {
                    if start.is_some() {
                        return Err(LayoutError::MultipleStarts { row, col });
                    }
                    start = Some(CellIndex(cells.len() as u32));
                    CellKind::Empty
                }
                '$' => {
                    presents.push(CellIndex(cells.len() as u32));
                    CellKind::Empty
                }
                _ => return Err(LayoutError::UnknownSymbol { symbol, row, col }),
            };
            cells.push(kind);
        }
    }
    let start = start.ok_or(LayoutError::MissingStart)?;

    let cell_count = cells.len();
    let connections: Vec<(CellIndex, CellIndex)> = connections
        .iter()
        .map(|&(from, to)| (CellIndex(from), CellIndex(to)))
        .collect();
    let board = Board::new(
        rows.len() as u32,
        width as u32,
        cells,
        start,
        &connections,
        edge,
    )?;
    let catalog = PresentCatalog::new(presents, cell_count)?;
    Ok(Puzzle { board, catalog })
}
