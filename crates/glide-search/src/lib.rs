//! Breadth-first search over Glide boards.
//!
//! The search state space is (cell, present mask). [`Search`] expands it
//! level by level from the start cell, pruning every state whose cell has
//! already been reached with a subset of its remaining presents; the
//! per-cell [`DominanceIndex`] answers that question.
//!
//! The whole mutable state lives in a [`SearchState`], which a checkpoint
//! store can save and hand back to [`Search::resume`]. A
//! [`SearchObserver`] sees every target visit between steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dominance;
pub mod driver;
pub mod error;
pub mod frontier;
pub mod observer;
pub mod playback;
pub mod state;

pub use config::{ConfigError, SearchConfig};
pub use dominance::{DominanceIndex, TrieNode};
pub use driver::{Search, SearchOutcome, SearchStatus};
pub use error::{DominanceImportError, PlaybackError, SearchError};
pub use frontier::FrontierRecord;
pub use observer::{SearchObserver, TargetEvent};
pub use state::{BestResult, SearchState};
