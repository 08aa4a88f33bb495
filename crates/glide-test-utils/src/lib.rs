//! Test utilities for Glide development.
//!
//! Provides seeded random boards ([`RandomBoard`]), a hand-made corridor
//! layout, scratch directories, and [`exhaustive_search`], a pruning-free
//! breadth-first search to check the real driver against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{corridor, unique_temp_dir, RandomBoard};
pub use reference::{exhaustive_search, ReferenceResult};
