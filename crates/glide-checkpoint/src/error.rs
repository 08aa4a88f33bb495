//! Error types for checkpoint storage.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while saving or loading a checkpoint.
///
/// [`Missing`](Self::Missing) is kept apart from the corruption variants so
/// callers can fall back to a fresh start without masking damaged files.
#[derive(Debug)]
pub enum CheckpointError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The checkpoint file does not exist.
    Missing {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// The file does not start with the expected `b"GLDE"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the file.
        found: u8,
    },
    /// The checkpoint was written for a different board.
    BoardMismatch {
        /// Fingerprint from the file header.
        recorded: u64,
        /// Fingerprint of the current board.
        current: u64,
    },
    /// The decompressed body does not match its recorded hash.
    BodyHashMismatch {
        /// Hash stored after the body.
        recorded: u64,
        /// Hash of the bytes actually read.
        computed: u64,
    },
    /// The body could not be decoded (truncated or corrupt data).
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for CheckpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Missing { path } => write!(f, "checkpoint {} does not exist", path.display()),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"GLDE\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::BoardMismatch { recorded, current } => {
                write!(
                    f,
                    "board fingerprint mismatch: recorded={recorded:#018x}, current={current:#018x}"
                )
            }
            Self::BodyHashMismatch { recorded, computed } => {
                write!(
                    f,
                    "body hash mismatch: recorded={recorded:#018x}, computed={computed:#018x}"
                )
            }
            Self::Malformed { detail } => write!(f, "malformed checkpoint: {detail}"),
        }
    }
}

impl std::error::Error for CheckpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CheckpointError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl CheckpointError {
    /// `true` for [`Missing`](Self::Missing).
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}
