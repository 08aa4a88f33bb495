//! Fixed-width bitmask of presents still lying on the board.

use std::fmt;

/// Bitmask of presents that have not been collected yet.
///
/// Bit `i` set means the present in catalog slot `i` is still on the
/// board. Along a single move sequence bits only ever clear. Equality
/// and ordering are plain bitwise comparisons of the underlying `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PresentMask(pub u32);

impl PresentMask {
    /// Maximum number of presents a mask can track.
    pub const MAX_WIDTH: u32 = 32;

    /// Mask with the low `width` bits set: every present still uncollected.
    ///
    /// # Panics
    ///
    /// Panics if `width > 32`.
    pub fn full(width: u32) -> Self {
        assert!(
            width <= Self::MAX_WIDTH,
            "present mask width {width} exceeds {}",
            Self::MAX_WIDTH
        );
        if width == Self::MAX_WIDTH {
            Self(u32::MAX)
        } else {
            Self((1u32 << width) - 1)
        }
    }

    /// The mask with every present collected.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bits.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether slot `bit` is still uncollected.
    #[inline]
    pub fn contains(self, bit: u8) -> bool {
        self.0 & (1u32 << bit) != 0
    }

    /// Mark slot `bit` as collected.
    #[inline]
    pub fn clear(&mut self, bit: u8) {
        self.0 &= !(1u32 << bit);
    }

    /// Number of presents still uncollected.
    #[inline]
    pub fn remaining(self) -> u32 {
        self.0.count_ones()
    }

    /// `true` when every set bit of `self` is also set in `other`.
    #[inline]
    pub fn is_subset_of(self, other: PresentMask) -> bool {
        self.0 & !other.0 == 0
    }
}

impl fmt::Display for PresentMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
