//! Exhaustive reference search.
//!
//! Plain breadth-first search over every distinct (cell, mask) state, with
//! no dominance pruning. Slow, but obviously correct, which makes it the
//! yardstick for the pruned driver on small boards.

use std::collections::{HashSet, VecDeque};

use glide_board::{Board, PresentCatalog};
use glide_core::{CellIndex, CellKind, Direction, PresentMask};

/// What the exhaustive search found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceResult {
    /// Length of the shortest move string reaching the target with every
    /// present collected.
    pub shortest_full: Option<usize>,
    /// Fewest presents left over all target visits.
    pub fewest_left: Option<u32>,
    /// Distinct states explored.
    pub states: usize,
}

/// Explore every reachable state. Target states are not expanded.
pub fn exhaustive_search(board: &Board, catalog: &PresentCatalog) -> ReferenceResult {
    let start = (board.start(), catalog.full_mask());
    let mut seen: HashSet<(CellIndex, PresentMask)> = HashSet::from([start]);
    let mut queue = VecDeque::from([(start.0, start.1, 0usize)]);
    let mut shortest_full = None;
    let mut fewest_left: Option<u32> = None;

    while let Some((pos, mask, depth)) = queue.pop_front() {
        if board.piece_at(pos) == CellKind::Target {
            let left = mask.remaining();
            fewest_left = Some(fewest_left.map_or(left, |f| f.min(left)));
            if left == 0 && shortest_full.is_none() {
                shortest_full = Some(depth);
            }
            continue;
        }
        for dir in Direction::ALL {
            let mut presents = catalog.state(mask);
            if let Some(landing) = board.slide(pos, dir, &mut presents) {
                if seen.insert((landing, presents.mask())) {
                    queue.push_back((landing, presents.mask(), depth + 1));
                }
            }
        }
    }

    ReferenceResult {
        shortest_full,
        fewest_left,
        states: seen.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::corridor;

    #[test]
    fn corridor_is_one_move() {
        let p = corridor(4);
        let r = exhaustive_search(&p.board, &p.catalog);
        assert_eq!(r.shortest_full, Some(1));
        assert_eq!(r.fewest_left, Some(0));
    }
}
