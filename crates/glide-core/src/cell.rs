//! Board cell kinds.

/// What occupies a board cell.
///
/// Presents and the starting position are not cell kinds: both sit on
/// [`CellKind::Empty`] cells and are tracked separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellKind {
    /// Open ice. Slides pass over it.
    Empty = 0,
    /// Solid; blocks movement.
    Wall = 1,
    /// Solid; blocks movement.
    Tree = 2,
    /// The goal. A slide stops on it and the path ends there.
    Target = 3,
    /// Entrance of a teleport. A slide stops on it and continues from
    /// the paired destination.
    HoleEntrance = 4,
}

impl CellKind {
    /// `true` for walls and trees.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, CellKind::Wall | CellKind::Tree)
    }
}
