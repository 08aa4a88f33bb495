//! Compressed, resumable checkpoints of Glide search state.
//!
//! A checkpoint holds everything [`Search::resume`](glide_search::Search::resume)
//! needs to continue a run as if it had never stopped: the best result,
//! both counters, the frontier in order and every cell's dominance index.
//!
//! # Architecture
//!
//! - [`codec`] encodes a [`SearchState`](glide_search::SearchState) to any
//!   `Write` sink and back
//! - [`CheckpointStore`] names, writes and loads checkpoint files
//! - [`RetentionPolicy`] decides which older files to delete
//! - [`Checkpointer`] is a search observer that saves on a cadence
//!
//! # Format
//!
//! ```text
//! [MAGIC "GLDE"] [VERSION u8] [board fingerprint u64]
//! [LZ4 frame: body, body hash u64]
//! ```
//!
//! The fingerprint ties a file to the board it was written for. The body
//! hash is an FNV-1a digest of the uncompressed body.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod checkpointer;
pub mod codec;
pub mod config;
pub mod error;
pub mod hash;
pub mod retention;
pub mod store;

pub use checkpointer::Checkpointer;
pub use config::{CheckpointConfig, ConfigError, Retention};
pub use error::CheckpointError;
pub use hash::board_fingerprint;
pub use retention::{KeepAll, KeepLatest, RetentionPolicy};
pub use store::CheckpointStore;

/// Magic bytes at the start of every checkpoint file.
pub const MAGIC: [u8; 4] = *b"GLDE";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
