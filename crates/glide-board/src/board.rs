//! Immutable grid with the sliding rule.

use crate::catalog::CollectionState;
use crate::edge::EdgeBehavior;
use crate::error::BoardError;
use crate::grid;
use glide_core::{CellIndex, CellKind, Direction};

/// A rectangular puzzle board.
///
/// Cells are stored row-major and addressed by [`CellIndex`]. Every
/// [`CellKind::HoleEntrance`] has exactly one teleport destination; every
/// other cell maps to itself in the teleport table.
///
/// Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Absorb**: the edge blocks sliding
/// - **Wrap**: the slide continues from the opposite edge (torus)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
    cells: Box<[CellKind]>,
    start: CellIndex,
    teleports: Box<[CellIndex]>,
}

impl Board {
    /// Create a board of `rows * cols` cells.
    ///
    /// `connections` lists `(hole, destination)` pairs. Every hole must
    /// appear exactly once as a source; destinations may be any cell.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the dimensions are empty or mismatched,
    /// an index is out of range, the start is solid, or the connections do
    /// not cover each hole exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide_board::{Board, EdgeBehavior};
    /// use glide_core::{CellIndex, CellKind};
    ///
    /// let cells = vec![CellKind::Empty; 9];
    /// let board = Board::new(3, 3, cells, CellIndex(4), &[], EdgeBehavior::Absorb).unwrap();
    /// assert_eq!(board.cell_count(), 9);
    /// assert_eq!(board.start(), CellIndex(4));
    /// ```
    pub fn new(
        rows: u32,
        cols: u32,
        cells: Vec<CellKind>,
        start: CellIndex,
        connections: &[(CellIndex, CellIndex)],
        edge: EdgeBehavior,
    ) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyBoard);
        }
        let cell_count = rows
            .checked_mul(cols)
            .ok_or(BoardError::DimensionTooLarge { rows, cols })? as usize;
        if cells.len() != cell_count {
            return Err(BoardError::CellCountMismatch {
                expected: cell_count,
                found: cells.len(),
            });
        }
        if start.index() >= cell_count {
            return Err(BoardError::CellOutOfBounds {
                what: "start",
                cell: start,
                cell_count,
            });
        }
        if cells[start.index()].is_solid() {
            return Err(BoardError::StartOnSolid {
                row: start.row(cols),
                col: start.col(cols),
            });
        }

        let mut teleports: Box<[CellIndex]> = (0..cell_count as u32).map(CellIndex).collect();
        let mut connected = vec![false; cell_count];
        for &(from, to) in connections {
            for (what, cell) in [("connection source", from), ("connection destination", to)] {
                if cell.index() >= cell_count {
                    return Err(BoardError::CellOutOfBounds {
                        what,
                        cell,
                        cell_count,
                    });
                }
            }
            if cells[from.index()] != CellKind::HoleEntrance {
                return Err(BoardError::ConnectionNotOnHole {
                    row: from.row(cols),
                    col: from.col(cols),
                });
            }
            if cells[to.index()].is_solid() {
                return Err(BoardError::DestinationOnSolid {
                    row: to.row(cols),
                    col: to.col(cols),
                });
            }
            if connected[from.index()] {
                return Err(BoardError::DuplicateConnection {
                    row: from.row(cols),
                    col: from.col(cols),
                });
            }
            connected[from.index()] = true;
            teleports[from.index()] = to;
        }
        if let Some(hole) = cells
            .iter()
            .enumerate()
            .position(|(i, &kind)| kind == CellKind::HoleEntrance && !connected[i])
        {
            let hole = CellIndex(hole as u32);
            return Err(BoardError::UnconnectedHole {
                row: hole.row(cols),
                col: hole.col(cols),
            });
        }

        Ok(Self {
            rows,
            cols,
            edge,
            cells: cells.into_boxed_slice(),
            start,
            teleports,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// `true` if sliding off an edge wraps around.
    pub fn is_torus(&self) -> bool {
        self.edge.is_torus()
    }

    /// The penguin's starting cell.
    pub fn start(&self) -> CellIndex {
        self.start
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// What occupies `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[inline]
    pub fn piece_at(&self, pos: CellIndex) -> CellKind {
        self.cells[pos.index()]
    }

    /// `(hole, destination)` for every hole, in cell order.
    pub fn connections(&self) -> impl Iterator<Item = (CellIndex, CellIndex)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &kind)| kind == CellKind::HoleEntrance)
            .map(|(i, _)| (CellIndex(i as u32), self.teleports[i]))
    }

    /// Where a slide that stopped on `pos` ends up: the teleport
    /// destination for a hole, `pos` itself otherwise.
    #[inline]
    pub fn resolve_landing(&self, pos: CellIndex) -> CellIndex {
        self.teleports[pos.index()]
    }

    /// One step from `pos` in `dir`.
    ///
    /// Returns the neighbor if it exists (wrapping on a torus) and is not
    /// solid; `None` if the edge or a wall or tree blocks the step.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[inline]
    pub fn attempt_slide(&self, pos: CellIndex, dir: Direction) -> Option<CellIndex> {
        assert!(
            pos.index() < self.cells.len(),
            "cell {pos} out of bounds: [0, {})",
            self.cells.len()
        );
        let next = grid::step(pos, dir, self.rows, self.cols, self.edge)?;
        (!self.piece_at(next).is_solid()).then_some(next)
    }

    /// Slide from `pos` in `dir` until something stops the penguin.
    ///
    /// Every entered cell is collected on `presents`. The slide stops on
    /// the first non-empty cell (target or hole) or when the next step is
    /// blocked. A slide that stops on a hole lands on its teleport
    /// destination.
    ///
    /// Returns `None`, leaving `presents` untouched, if the first step is
    /// already blocked or if the slide would circle a torus forever.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide_board::{parse_layout, EdgeBehavior};
    /// use glide_core::{CellIndex, Direction};
    ///
    /// let puzzle = parse_layout(&["#####", "#P $#", "#####"], &[], EdgeBehavior::Absorb).unwrap();
    /// let mut presents = puzzle.catalog.initial_state();
    /// let landing = puzzle.board.slide(puzzle.board.start(), Direction::Right, &mut presents);
    /// assert_eq!(landing, Some(CellIndex(8)));
    /// assert_eq!(presents.presents_left(), 0);
    /// ```
    pub fn slide(
        &self,
        pos: CellIndex,
        dir: Direction,
        presents: &mut CollectionState<'_>,
    ) -> Option<CellIndex> {
        let mut swept = *presents;
        let mut current = pos;
        let mut moved = false;
        while let Some(next) = self.attempt_slide(current, dir) {
            if next == pos && self.piece_at(next) == CellKind::Empty {
                // Came all the way round a torus line without stopping.
                return None;
            }
            current = next;
            moved = true;
            swept.collect_on(current);
            if self.piece_at(current) != CellKind::Empty {
                break;
            }
        }
        if !moved {
            return None;
        }
        *presents = swept;
        Some(self.resolve_landing(current))
    }

    /// `(row, col)` of `pos`.
    pub fn row_col(&self, pos: CellIndex) -> (u32, u32) {
        (pos.row(self.cols), pos.col(self.cols))
    }
}
