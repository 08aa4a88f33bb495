//! Search configuration and validation.

use std::error::Error;
use std::fmt;

// ── SearchConfig ───────────────────────────────────────────────────

/// Tuning knobs for a [`Search`](crate::Search).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Log a progress line every this many target visits, in addition to
    /// every new record. Default: 250.
    pub report_every: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { report_every: 250 }
    }
}

impl SearchConfig {
    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroReportInterval`] if `report_every` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report_every == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SearchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `report_every` is zero.
    ZeroReportInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroReportInterval => write!(f, "report interval must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SearchConfig::default();
        assert_eq!(config.report_every, 250);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_interval_rejected() {
        let config = SearchConfig { report_every: 0 };
        assert_eq!(config.validate(), Err(ConfigError::ZeroReportInterval));
    }
}
