//! Single-step neighbor arithmetic on a row-major grid.

use crate::edge::EdgeBehavior;
use glide_core::{CellIndex, Direction};

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(value)` in range or `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: i64, len: u32, edge: EdgeBehavior) -> Option<u32> {
    let n = i64::from(len);
    if val >= 0 && val < n {
        return Some(val as u32);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n) as u32),
    }
}

/// The cell one step from `pos` in `dir`, or `None` past an absorbing edge.
///
/// Does not look at cell contents.
pub(crate) fn step(
    pos: CellIndex,
    dir: Direction,
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
) -> Option<CellIndex> {
    let (dr, dc) = dir.offset_2d();
    let r = resolve_axis(i64::from(pos.row(cols)) + i64::from(dr), rows, edge)?;
    let c = resolve_axis(i64::from(pos.col(cols)) + i64::from(dc), cols, edge)?;
    Some(CellIndex::from_row_col(r, c, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_range_is_identity() {
        assert_eq!(resolve_axis(3, 5, EdgeBehavior::Absorb), Some(3));
        assert_eq!(resolve_axis(3, 5, EdgeBehavior::Wrap), Some(3));
    }

    #[test]
    fn resolve_axis_edges() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), Some(4));
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Wrap), Some(0));
    }

    #[test]
    fn step_wraps_to_mirrored_cell() {
        // 4x5 grid, cell (0, 2) = 2
        let top = CellIndex(2);
        assert_eq!(step(top, Direction::Up, 4, 5, EdgeBehavior::Absorb), None);
        assert_eq!(
            step(top, Direction::Up, 4, 5, EdgeBehavior::Wrap),
            Some(CellIndex(17))
        );
        // (1, 4) = 9, right edge
        let right = CellIndex(9);
        assert_eq!(
            step(right, Direction::Right, 4, 5, EdgeBehavior::Wrap),
            Some(CellIndex(5))
        );
        assert_eq!(
            step(right, Direction::Left, 4, 5, EdgeBehavior::Absorb),
            Some(CellIndex(8))
        );
    }
}
