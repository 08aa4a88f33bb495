//! Present catalog and per-path collection state.
//!
//! [`PresentCatalog`] is built once per board and assigns each present cell
//! a bit in a [`PresentMask`]. [`CollectionState`] pairs the catalog with a
//! mask and is the only thing a slide mutates.

use indexmap::IndexSet;

use crate::error::CatalogError;
use glide_core::{CellIndex, PresentMask};

/// Static mapping from present cells to mask bits.
///
/// Bits are assigned in the order the positions are supplied. The layout
/// parser supplies them in row-major discovery order, so bit 0 is the
/// present closest to the top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentCatalog {
    /// Present cells, indexed by bit.
    positions: Vec<CellIndex>,
    /// Per-cell bit lookup; `None` for cells without a present.
    slots: Box<[Option<u8>]>,
}

impl PresentCatalog {
    /// Build a catalog for a board with `cell_count` cells.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::TooManyPresents`] for more than 32 positions,
    /// [`CatalogError::DuplicatePresent`] if a cell is listed twice and
    /// [`CatalogError::PresentOutOfBounds`] for a cell outside the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide_board::PresentCatalog;
    /// use glide_core::{CellIndex, PresentMask};
    ///
    /// let catalog = PresentCatalog::new([CellIndex(7), CellIndex(3)], 16).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.slot_of(CellIndex(7)), Some(0));
    /// assert_eq!(catalog.slot_of(CellIndex(3)), Some(1));
    /// assert_eq!(catalog.full_mask(), PresentMask(0b11));
    /// ```
    pub fn new(
        positions: impl IntoIterator<Item = CellIndex>,
        cell_count: usize,
    ) -> Result<Self, CatalogError> {
        let mut unique = IndexSet::new();
        for cell in positions {
            if cell.index() >= cell_count {
                return Err(CatalogError::PresentOutOfBounds { cell, cell_count });
            }
            if !unique.insert(cell) {
                return Err(CatalogError::DuplicatePresent { cell });
            }
        }
        if unique.len() > PresentMask::MAX_WIDTH as usize {
            return Err(CatalogError::TooManyPresents {
                count: unique.len(),
                max: PresentMask::MAX_WIDTH,
            });
        }

        let mut slots = vec![None; cell_count].into_boxed_slice();
        for (bit, cell) in unique.iter().enumerate() {
            slots[cell.index()] = Some(bit as u8);
        }
        Ok(Self {
            positions: unique.into_iter().collect(),
            slots,
        })
    }

    /// A catalog without presents.
    pub fn empty(cell_count: usize) -> Self {
        Self {
            positions: Vec::new(),
            slots: vec![None; cell_count].into_boxed_slice(),
        }
    }

    /// Total number of presents, `N`.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` when the board has no presents.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Width of the masks this catalog produces, in bits.
    pub fn width(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Present cells, indexed by bit.
    pub fn positions(&self) -> &[CellIndex] {
        &self.positions
    }

    /// Number of cells this catalog was built for.
    pub fn cell_count(&self) -> usize {
        self.slots.len()
    }

    /// Mask bit of the present at `cell`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    #[inline]
    pub fn slot_of(&self, cell: CellIndex) -> Option<u8> {
        self.slots[cell.index()]
    }

    /// Mask with every present still on the board.
    pub fn full_mask(&self) -> PresentMask {
        PresentMask::full(self.width())
    }

    /// Collection state at the start of a run.
    pub fn initial_state(&self) -> CollectionState<'_> {
        CollectionState {
            catalog: self,
            mask: self.full_mask(),
        }
    }

    /// Collection state for a mask recorded earlier.
    pub fn state(&self, mask: PresentMask) -> CollectionState<'_> {
        CollectionState {
            catalog: self,
            mask,
        }
    }
}

/// Mutable overlay of a [`PresentCatalog`]: which presents a path has not
/// collected yet.
///
/// Cheap to copy; the search gives every slide direction its own copy.
#[derive(Clone, Copy, Debug)]
pub struct CollectionState<'a> {
    catalog: &'a PresentCatalog,
    mask: PresentMask,
}

impl<'a> CollectionState<'a> {
    /// Collect the present at `cell`, if there is one.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    #[inline]
    pub fn collect_on(&mut self, cell: CellIndex) {
        if let Some(bit) = self.catalog.slot_of(cell) {
            self.mask.clear(bit);
        }
    }

    /// Number of presents still on the board.
    pub fn presents_left(&self) -> u32 {
        self.mask.remaining()
    }

    /// Number of presents collected so far.
    pub fn presents_collected(&self) -> u32 {
        self.catalog.width() - self.mask.remaining()
    }

    /// The underlying mask.
    pub fn mask(&self) -> PresentMask {
        self.mask
    }

    /// The catalog this state belongs to.
    pub fn catalog(&self) -> &'a PresentCatalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_follow_supply_order() {
        let catalog = PresentCatalog::new([CellIndex(5), CellIndex(1), CellIndex(9)], 10).unwrap();
        assert_eq!(catalog.slot_of(CellIndex(5)), Some(0));
        assert_eq!(catalog.slot_of(CellIndex(1)), Some(1));
        assert_eq!(catalog.slot_of(CellIndex(9)), Some(2));
        assert_eq!(catalog.slot_of(CellIndex(0)), None);
        assert_eq!(catalog.positions(), &[CellIndex(5), CellIndex(1), CellIndex(9)]);
    }

    #[test]
    fn rejects_more_than_32_presents() {
        let err = PresentCatalog::new((0..33).map(CellIndex), 64).unwrap_err();
        assert_eq!(err, CatalogError::TooManyPresents { count: 33, max: 32 });
        assert!(PresentCatalog::new((0..32).map(CellIndex), 64).is_ok());
    }

    #[test]
    fn rejects_duplicates_and_out_of_bounds() {
        assert_eq!(
            PresentCatalog::new([CellIndex(2), CellIndex(2)], 4).unwrap_err(),
            CatalogError::DuplicatePresent { cell: CellIndex(2) }
        );
        assert_eq!(
            PresentCatalog::new([CellIndex(4)], 4).unwrap_err(),
            CatalogError::PresentOutOfBounds {
                cell: CellIndex(4),
                cell_count: 4
            }
        );
    }

    #[test]
    fn collect_on_clears_only_catalogued_cells() {
        let catalog = PresentCatalog::new([CellIndex(0), CellIndex(3)], 4).unwrap();
        let mut state = catalog.initial_state();
        assert_eq!(state.presents_left(), 2);
        assert_eq!(state.presents_collected(), 0);

        state.collect_on(CellIndex(1));
        assert_eq!(state.mask(), PresentMask(0b11));

        state.collect_on(CellIndex(3));
        assert_eq!(state.mask(), PresentMask(0b01));
        assert_eq!(state.presents_left(), 1);
        assert_eq!(state.presents_collected(), 1);

        // Collecting twice is a no-op.
        state.collect_on(CellIndex(3));
        assert_eq!(state.presents_left(), 1);
    }

    #[test]
    fn empty_catalog_has_zero_width() {
        let catalog = PresentCatalog::empty(9);
        assert!(catalog.is_empty());
        assert_eq!(catalog.full_mask(), PresentMask(0));
        assert_eq!(catalog.initial_state().presents_left(), 0);
    }

    #[test]
    #[should_panic]
    fn collect_out_of_bounds_panics() {
        let catalog = PresentCatalog::empty(4);
        catalog.initial_state().collect_on(CellIndex(4));
    }
}
