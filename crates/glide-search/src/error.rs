//! Error types for the search crate.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;
use glide_core::{CellIndex, PresentMask};

/// Errors arising from [`DominanceIndex::from_nodes`](crate::DominanceIndex::from_nodes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DominanceImportError {
    /// The width exceeds the 32-bit mask ceiling.
    WidthTooLarge {
        /// The requested width.
        width: u32,
    },
    /// A child index points outside the arena.
    DanglingChild {
        /// Index of the parent node.
        parent: usize,
        /// The offending child index.
        child: u32,
        /// Arena size.
        node_count: usize,
    },
    /// A child index does not point past its parent.
    BackwardChild {
        /// Index of the parent node.
        parent: usize,
        /// The offending child index.
        child: u32,
    },
}

impl fmt::Display for DominanceImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthTooLarge { width } => {
                write!(f, "dominance width {width} exceeds {}", PresentMask::MAX_WIDTH)
            }
            Self::DanglingChild {
                parent,
                child,
                node_count,
            } => write!(
                f,
                "node {parent} has child {child} outside the arena of {node_count} nodes"
            ),
            Self::BackwardChild { parent, child } => {
                write!(f, "node {parent} has child {child} that does not follow it")
            }
        }
    }
}

impl Error for DominanceImportError {}

/// Errors arising when constructing or resuming a [`Search`](crate::Search).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The search configuration is invalid.
    Config(ConfigError),
    /// The catalog was built for a board of a different size.
    CatalogMismatch {
        /// Cells on the board.
        board_cells: usize,
        /// Cells the catalog was built for.
        catalog_cells: usize,
    },
    /// A resumed state does not carry one index per cell.
    IndexCountMismatch {
        /// Cells on the board.
        expected: usize,
        /// Indices in the state.
        found: usize,
    },
    /// A resumed index was built for a different number of presents.
    IndexWidthMismatch {
        /// Cell the index belongs to.
        cell: CellIndex,
        /// Presents on the board.
        expected: u32,
        /// Width of the index.
        found: u32,
    },
    /// A resumed frontier record lies outside the board.
    RecordOutOfBounds {
        /// The record's position.
        position: CellIndex,
        /// Cells on the board.
        cell_count: usize,
    },
    /// A resumed frontier record has bits beyond the present count.
    RecordMaskTooWide {
        /// The record's position.
        position: CellIndex,
        /// The record's mask.
        mask: PresentMask,
        /// Presents on the board.
        width: u32,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::CatalogMismatch {
                board_cells,
                catalog_cells,
            } => write!(
                f,
                "catalog covers {catalog_cells} cells but the board has {board_cells}"
            ),
            Self::IndexCountMismatch { expected, found } => {
                write!(f, "expected {expected} dominance indices, found {found}")
            }
            Self::IndexWidthMismatch {
                cell,
                expected,
                found,
            } => write!(
                f,
                "dominance index for cell {cell} has width {found}, expected {expected}"
            ),
            Self::RecordOutOfBounds {
                position,
                cell_count,
            } => write!(
                f,
                "frontier record at cell {position} out of bounds: [0, {cell_count})"
            ),
            Self::RecordMaskTooWide {
                position,
                mask,
                width,
            } => write!(
                f,
                "frontier record at cell {position} has mask {mask} wider than {width} presents"
            ),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Errors arising from [`playback`](crate::playback::playback).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackError {
    /// A character that is not `U`, `D`, `L` or `R`.
    InvalidMove {
        /// The character.
        symbol: char,
        /// Zero-based position in the move string.
        index: usize,
    },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMove { symbol, index } => {
                write!(f, "invalid move '{symbol}' at position {index}")
            }
        }
    }
}

impl Error for PlaybackError {}
