//! Frontier records.

use glide_core::{CellIndex, Direction, PresentMask};

/// One unexpanded search state: where the penguin stands, which presents
/// are still out, and the moves that led here.
///
/// Records are never mutated; [`advance`](Self::advance) derives the
/// successor for one more slide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrontierRecord {
    position: CellIndex,
    mask: PresentMask,
    moves: String,
}

impl FrontierRecord {
    /// A record with an explicit move path.
    pub fn new(position: CellIndex, mask: PresentMask, moves: impl Into<String>) -> Self {
        Self {
            position,
            mask,
            moves: moves.into(),
        }
    }

    /// The record for the start of a run: no moves yet.
    pub fn start(position: CellIndex, mask: PresentMask) -> Self {
        Self::new(position, mask, String::new())
    }

    /// Cell the penguin occupies.
    pub fn position(&self) -> CellIndex {
        self.position
    }

    /// Presents still on the board.
    pub fn mask(&self) -> PresentMask {
        self.mask
    }

    /// Direction symbols taken so far.
    pub fn moves(&self) -> &str {
        &self.moves
    }

    /// Number of slides taken so far.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Successor after sliding in `dir` to `landing` with `mask` left.
    pub fn advance(&self, dir: Direction, landing: CellIndex, mask: PresentMask) -> Self {
        let mut moves = String::with_capacity(self.moves.len() + 1);
        moves.push_str(&self.moves);
        moves.push(dir.symbol());
        Self {
            position: landing,
            mask,
            moves,
        }
    }
}
