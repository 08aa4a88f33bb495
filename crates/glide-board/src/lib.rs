//! Board topology and sliding rules for Glide.
//!
//! A [`Board`] is an immutable grid of [`CellKind`](glide_core::CellKind)s
//! with a teleport table and an [`EdgeBehavior`]. Its one multi-step rule is
//! [`Board::slide`]: keep moving in one direction until blocked, stopping
//! early on any special cell and teleporting through holes.
//!
//! The [`PresentCatalog`] maps present cells to mask bits, and
//! [`CollectionState`] clears those bits as a slide sweeps over them.
//!
//! Text layouts (and the two published [`Preset`]s) are turned into a
//! validated [`Puzzle`] by [`parse_layout`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod catalog;
pub mod edge;
pub mod error;
pub(crate) mod grid;
pub mod layout;
pub mod presets;

pub use board::Board;
pub use catalog::{CollectionState, PresentCatalog};
pub use edge::EdgeBehavior;
pub use error::{BoardError, CatalogError, LayoutError};
pub use layout::{parse_layout, Puzzle};
pub use presets::Preset;
