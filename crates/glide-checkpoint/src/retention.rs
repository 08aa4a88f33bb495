//! Which older checkpoints to delete after a save.

use std::fmt;
use std::path::PathBuf;

/// Decides how many of the oldest checkpoints to delete.
///
/// `history` lists every checkpoint the store knows about, oldest first,
/// with the one just written last.
pub trait RetentionPolicy: fmt::Debug {
    /// Number of entries, counted from the front, that may be deleted.
    fn expired(&self, history: &[PathBuf]) -> usize;
}

/// Never delete anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeepAll;

impl RetentionPolicy for KeepAll {
    fn expired(&self, _history: &[PathBuf]) -> usize {
        0
    }
}

/// Keep only the newest `count` checkpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeepLatest {
    /// How many to keep. At least 1.
    pub count: usize,
}

impl RetentionPolicy for KeepLatest {
    fn expired(&self, history: &[PathBuf]) -> usize {
        history.len().saturating_sub(self.count.max(1))
    }
}
