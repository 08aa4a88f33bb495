//! The two published puzzle boards.

use crate::edge::EdgeBehavior;
use crate::error::LayoutError;
use crate::layout::{parse_layout, Puzzle};

const CLASSIC_LAYOUT: [&str; 20] = [
    "####################",
    "#   # # #          #",
    "#      ###  #     O#",
    "#       #   #  #   #",
    "##  # #  # #       #",
    "#       #    #   ###",
    "#      # #  #      #",
    "##      #       ## #",
    "#    ### ### ## #  #",
    "#    #P #          #",
    "# O               ##",
    "#       #          #",
    "#        # #       #",
    "#   #   #   #    # #",
    "#    #   #  #  #   #",
    "#  #    #      ## ##",
    "#     #  #    ##   #",
    "#     # # #        X",
    "# #  ##    #    #  #",
    "####################",
];

const CLASSIC_CONNECTIONS: [(u32, u32); 2] = [(58, 202), (202, 58)];

const CHRISTMAS_LAYOUT: [&str; 40] = [
    "TT T#T   #T#T#T#T #   T #T#  #TT  #T$  #",
    "T     #     $                          T",
    "T       $  T TT  TT##T#TT   T  T  T  T  ",
    "   T     T   T  T         T$            ",
    "#T     T   O   T$TT##TTTT   TT T        ",
    "  $ T                           T   T   ",
    "#                TT#TTTTT$             T",
    "     T  T    TT$                  T$    ",
    " T          T$   T#TT#T#T  T#          #",
    "        T    T T         #      T      O",
    "# T     #    T   T##TTTT# T T      T#T $",
    "    T T              P         # $     #",
    "#          TT    T##T#TTT T   T    T T #",
    "     TTT   T   T       $     #   T   T T",
    "T  #$        T  #T###TT#T T TT          ",
    "   ## T   T     T        T T        T T#",
    "  #T        #  T#T##TT#T#  T T    T     ",
    "T T  T T T  #                # TT T    #",
    "     T   #   T   TT#TTTTT T# T       T  ",
    "T  T       #  #     $           T   TTT ",
    "   T  T      T  #T##TTT## T  T#     T   ",
    "#   T    T    T T        TTT  T TT     T",
    "$T  #T    T    T TT#TT### T  T        T ",
    "# T T#    T #T            TT   T T T    ",
    "#        T  $    T###T#TT            T  ",
    "   T T        T        #  T     T    TT ",
    "T T T  ##   T T  T  T  T$T    T  T T  $ ",
    "   TT  T      T T $# T T   TT        T T",
    "      #TT  T                T    #     T",
    "  T        TTT T T T  T#T           T  T",
    "T  T    T      T             T T      TT",
    "#T   T        T  T TT # TT  TT  #      #",
    "#   T    ##    $   TT    #  #  T# T     ",
    " T     T     T TT TT#T      T   T       ",
    " # T              T T   T  #T T #  TT T#",
    "T  T      T T #    T  T   $            T",
    "T      TT       #        # #  T       TT",
    "# T         T      T          # T  T   #",
    "T$ O           T     T     T    T      X",
    " T #   # T    #T# #  ##   T  T  $ # #TTT",
];

const CHRISTMAS_CONNECTIONS: [(u32, u32); 3] = [(399, 1523), (1523, 171), (171, 399)];

/// A built-in board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 20x20 without wrap, no presents, one pair of holes.
    Classic,
    /// 40x40 torus with 24 presents and a cycle of three holes.
    Christmas,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Christmas];

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Christmas => "christmas",
        }
    }

    /// Edge behavior of this board.
    pub fn edge_behavior(self) -> EdgeBehavior {
        match self {
            Self::Classic => EdgeBehavior::Absorb,
            Self::Christmas => EdgeBehavior::Wrap,
        }
    }

    /// The layout rows.
    pub fn layout(self) -> &'static [&'static str] {
        match self {
            Self::Classic => &CLASSIC_LAYOUT,
            Self::Christmas => &CHRISTMAS_LAYOUT,
        }
    }

    /// Hole connections as `(from, to)` cell indices.
    pub fn connections(self) -> &'static [(u32, u32)] {
        match self {
            Self::Classic => &CLASSIC_CONNECTIONS,
            Self::Christmas => &CHRISTMAS_CONNECTIONS,
        }
    }

    /// Parse the preset into a [`Puzzle`].
    ///
    /// # Errors
    ///
    /// Never fails for the built-in layouts; the `Result` mirrors
    /// [`parse_layout`].
    pub fn load(self) -> Result<Puzzle, LayoutError> {
        parse_layout(self.layout(), self.connections(), self.edge_behavior())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::{CellIndex, CellKind};

    #[test]
    fn classic_dimensions() {
        let p = Preset::Classic.load().unwrap();
        assert_eq!((p.board.rows(), p.board.cols()), (20, 20));
        assert!(!p.board.is_torus());
        assert_eq!(p.catalog.len(), 0);
        assert_eq!(p.board.connections().count(), 2);
        assert_eq!(p.board.resolve_landing(CellIndex(58)), CellIndex(202));
        assert_eq!(p.board.resolve_landing(CellIndex(202)), CellIndex(58));
    }

    #[test]
    fn christmas_dimensions() {
        let p = Preset::Christmas.load().unwrap();
        assert_eq!((p.board.rows(), p.board.cols()), (40, 40));
        assert!(p.board.is_torus());
        assert_eq!(p.catalog.len(), 24);
        assert_eq!(p.board.resolve_landing(CellIndex(399)), CellIndex(1523));
        assert_eq!(p.board.resolve_landing(CellIndex(1523)), CellIndex(171));
        assert_eq!(p.board.resolve_landing(CellIndex(171)), CellIndex(399));
        assert_eq!(
            p.board.cells().iter().filter(|&&k| k == CellKind::Target).count(),
            1
        );
    }

    #[test]
    fn names_are_distinct() {
        assert_eq!(Preset::ALL.map(Preset::name), ["classic", "christmas"]);
    }
}
