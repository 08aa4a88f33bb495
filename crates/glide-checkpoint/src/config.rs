//! Checkpoint configuration and validation.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::retention::{KeepAll, KeepLatest, RetentionPolicy};

// ── Retention ──────────────────────────────────────────────────────

/// Built-in retention choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Retention {
    /// Keep every checkpoint.
    #[default]
    KeepAll,
    /// Keep only the newest `n`.
    KeepLatest(usize),
}

impl Retention {
    /// The policy object for this choice.
    pub fn policy(self) -> Box<dyn RetentionPolicy> {
        match self {
            Self::KeepAll => Box::new(KeepAll),
            Self::KeepLatest(count) => Box::new(KeepLatest { count }),
        }
    }
}

// ── CheckpointConfig ───────────────────────────────────────────────

/// Where and how often to write checkpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckpointConfig {
    /// Directory for checkpoint files. Default: the current directory.
    pub directory: PathBuf,
    /// Save every this many target visits, in addition to every new
    /// record. Default: 100 000.
    pub every: u64,
    /// Which older files to delete after a save. Default: keep all.
    pub retention: Retention,
    /// Whether to save at all. Default: `true`.
    pub enabled: bool,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            every: 100_000,
            retention: Retention::KeepAll,
            enabled: true,
        }
    }
}

impl CheckpointConfig {
    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero interval or a zero retention
    /// count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.every == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.retention == Retention::KeepLatest(0) {
            return Err(ConfigError::ZeroRetention);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`CheckpointConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `every` is zero.
    ZeroInterval,
    /// `retention` keeps zero files.
    ZeroRetention,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInterval => write!(f, "checkpoint interval must be at least 1"),
            Self::ZeroRetention => write!(f, "retention must keep at least one checkpoint"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CheckpointConfig::default();
        assert_eq!(config.every, 100_000);
        assert!(config.enabled);
        assert_eq!(config.retention, Retention::KeepAll);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn invalid_values_rejected() {
        let zero = CheckpointConfig {
            every: 0,
            ..CheckpointConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroInterval));
        let keep_none = CheckpointConfig {
            retention: Retention::KeepLatest(0),
            ..CheckpointConfig::default()
        };
        assert_eq!(keep_none.validate(), Err(ConfigError::ZeroRetention));
    }
}
