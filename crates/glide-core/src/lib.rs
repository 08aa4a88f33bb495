//! Core types for the Glide sliding-puzzle search.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! small value types shared by the board, the search driver and the
//! checkpoint codec: cell indices, directions, cell kinds and the
//! present bitmask.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod id;
pub mod mask;

pub use cell::CellKind;
pub use direction::Direction;
pub use id::CellIndex;
pub use mask::PresentMask;
