//! The complete mutable state of a search.
//!
//! [`SearchState`] is everything a checkpoint has to carry to resume a run
//! exactly where it stopped: the best result, the two counters, the
//! frontier in order and one [`DominanceIndex`] per cell.

use std::collections::VecDeque;

use crate::dominance::DominanceIndex;
use crate::error::SearchError;
use crate::frontier::FrontierRecord;
use glide_board::{Board, PresentCatalog};
use glide_core::{CellIndex, PresentMask};

/// Fewest presents left on any target visit so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BestResult {
    /// Presents still on the board when the target was reached.
    pub presents_left: u32,
    /// The moves that reached it.
    pub moves: String,
}

/// Mutable search state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    /// Best target visit so far; `None` until the target is first reached.
    pub best: Option<BestResult>,
    /// Target visits so far.
    pub targets_visited: u64,
    /// Records dequeued so far.
    pub rounds: u64,
    /// Unexpanded records, oldest first.
    pub frontier: VecDeque<FrontierRecord>,
    /// One dominance index per cell, in cell order.
    pub known: Vec<DominanceIndex>,
}

impl SearchState {
    /// State at the start of a run: the start record enqueued and marked
    /// as known.
    pub fn initial(board: &Board, catalog: &PresentCatalog) -> Self {
        let width = catalog.width();
        let full = catalog.full_mask();
        let mut known = vec![DominanceIndex::new(width); board.cell_count()];
        known[board.start().index()].insert(full);
        Self {
            best: None,
            targets_visited: 0,
            rounds: 0,
            frontier: VecDeque::from([FrontierRecord::start(board.start(), full)]),
            known,
        }
    }

    /// Check that this state fits `board` and `catalog`.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] naming the first inconsistency found.
    pub fn check_fits(&self, board: &Board, catalog: &PresentCatalog) -> Result<(), SearchError> {
        let cell_count = board.cell_count();
        if self.known.len() != cell_count {
            return Err(SearchError::IndexCountMismatch {
                expected: cell_count,
                found: self.known.len(),
            });
        }
        let width = catalog.width();
        if let Some((cell, index)) = self
            .known
            .iter()
            .enumerate()
            .find(|(_, index)| index.width() != width)
        {
            return Err(SearchError::IndexWidthMismatch {
                cell: CellIndex(cell as u32),
                expected: width,
                found: index.width(),
            });
        }
        let limit = PresentMask::full(width);
        for record in &self.frontier {
            if record.position().index() >= cell_count {
                return Err(SearchError::RecordOutOfBounds {
                    position: record.position(),
                    cell_count,
                });
            }
            if !record.mask().is_subset_of(limit) {
                return Err(SearchError::RecordMaskTooWide {
                    position: record.position(),
                    mask: record.mask(),
                    width,
                });
            }
        }
        Ok(())
    }
}
