//! Glide: a breadth-first solver for sliding-penguin present puzzles.
//!
//! A penguin slides across a grid until something stops it, collecting
//! every present it passes over. The solver finds the shortest move string
//! that collects every present and ends on the target, or, when none
//! exists, the best target visit it found.
//!
//! This is the facade crate that re-exports the public API of all Glide
//! sub-crates. It also builds the `glide` command-line binary.
//!
//! # Quick start
//!
//! ```rust
//! use glide::prelude::*;
//!
//! let puzzle = parse_layout(&["#######", "#P$ $X#", "#######"], &[], EdgeBehavior::Absorb)
//!     .unwrap();
//! let mut search = Search::new(&puzzle.board, &puzzle.catalog, SearchConfig::default()).unwrap();
//! match search.run(&mut ()) {
//!     SearchOutcome::Solved { moves, .. } => assert_eq!(moves, "R"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `glide-core` | Cell indices, directions, cell kinds, present masks |
//! | [`board`] | `glide-board` | Boards, slide rules, layouts, presets |
//! | [`search`] | `glide-search` | Dominance index, BFS driver, playback |
//! | [`checkpoint`] | `glide-checkpoint` | Compressed checkpoint files and retention |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`glide-core`).
pub use glide_core as types;

/// Boards, slide rules, layout parsing and presets (`glide-board`).
///
/// [`board::Board::slide`] is the movement rule everything else builds on.
pub use glide_board as board;

/// Breadth-first search with per-cell dominance pruning (`glide-search`).
pub use glide_search as search;

/// Resumable checkpoints (`glide-checkpoint`).
///
/// [`checkpoint::Checkpointer`] plugs into [`search::Search::run`] as an
/// observer.
pub use glide_checkpoint as checkpoint;

/// Common imports for solving a board.
///
/// ```rust
/// use glide::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use glide_core::{CellIndex, CellKind, Direction, PresentMask};

    // Boards
    pub use glide_board::{parse_layout, Board, EdgeBehavior, PresentCatalog, Preset, Puzzle};

    // Errors
    pub use glide_board::LayoutError;
    pub use glide_checkpoint::CheckpointError;
    pub use glide_search::SearchError;

    // Search
    pub use glide_search::playback::playback;
    pub use glide_search::{Search, SearchConfig, SearchObserver, SearchOutcome, SearchStatus};

    // Checkpoints
    pub use glide_checkpoint::{CheckpointConfig, CheckpointStore, Checkpointer, Retention};
}
