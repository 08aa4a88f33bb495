//! Board edge (boundary) behavior.

/// What happens when a slide steps off the edge of the board.
///
/// # Examples
///
/// ```
/// use glide_board::EdgeBehavior;
///
/// assert!(EdgeBehavior::Wrap.is_torus());
/// assert!(!EdgeBehavior::Absorb.is_torus());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// The edge blocks: there is no neighbor beyond it.
    Absorb,
    /// The neighbor wraps to the opposite side (torus).
    Wrap,
}

impl EdgeBehavior {
    /// Build from a torus flag.
    pub fn from_torus(torus: bool) -> Self {
        if torus {
            EdgeBehavior::Wrap
        } else {
            EdgeBehavior::Absorb
        }
    }

    /// `true` for [`EdgeBehavior::Wrap`].
    pub fn is_torus(self) -> bool {
        self == EdgeBehavior::Wrap
    }
}
