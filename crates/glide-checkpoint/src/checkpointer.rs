//! Search observer that writes checkpoints on a cadence.

use std::time::Instant;

use log::{info, warn};

use crate::config::{CheckpointConfig, ConfigError};
use crate::store::CheckpointStore;
use glide_search::{Search, SearchObserver, TargetEvent};

/// Saves the search on every new record and every `every` target visits.
///
/// A failed save is logged and counted; the search carries on.
#[derive(Debug)]
pub struct Checkpointer {
    store: CheckpointStore,
    every: u64,
    enabled: bool,
    saves: u64,
    failures: u64,
}

impl Checkpointer {
    /// Build from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`CheckpointConfig::validate`].
    pub fn new(config: &CheckpointConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store: CheckpointStore::from_config(config),
            every: config.every,
            enabled: config.enabled,
            saves: 0,
            failures: 0,
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &CheckpointStore {
        &self.store
    }

    /// The underlying store, e.g. to [`adopt`](CheckpointStore::adopt) the
    /// checkpoint a run resumed from.
    pub fn store_mut(&mut self) -> &mut CheckpointStore {
        &mut self.store
    }

    /// Successful saves so far.
    pub fn saves(&self) -> u64 {
        self.saves
    }

    /// Failed saves so far.
    pub fn failures(&self) -> u64 {
        self.failures
    }
}

impl SearchObserver for Checkpointer {
    fn on_target(&mut self, event: &TargetEvent<'_>, search: &Search<'_>) {
        if !self.enabled || !(event.is_record || event.visit % self.every == 0) {
            return;
        }
        let started = Instant::now();
        match self
            .store
            .save(search.board(), search.catalog(), search.state())
        {
            Ok(path) => {
                self.saves += 1;
                info!(
                    "made a state backup at #{} in {} ms: '{}'",
                    event.visit,
                    started.elapsed().as_millis(),
                    path.display()
                );
            }
            Err(e) => {
                self.failures += 1;
                warn!("state backup at #{} failed: {e}", event.visit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Retention;
    use glide_board::{parse_layout, EdgeBehavior};
    use glide_search::SearchConfig;
    use glide_test_utils::unique_temp_dir;

    #[test]
    fn saves_on_records_and_cadence() {
        let dir = unique_temp_dir("checkpointer_cadence");
        // Reaches the target twice: once with the present, once without.
        let p = parse_layout(&["#####", "#P X#", "#$  #", "#####"], &[], EdgeBehavior::Absorb)
            .unwrap();
        let config = CheckpointConfig {
            directory: dir.clone(),
            every: 1_000,
            retention: Retention::KeepAll,
            enabled: true,
        };
        let mut checkpointer = Checkpointer::new(&config).unwrap();
        let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        search.run(&mut checkpointer);
        assert_eq!(checkpointer.saves(), 2);
        assert_eq!(checkpointer.failures(), 0);
        assert!(dir.join("state_1_4_5_0_1.lz4.bin").exists());
        assert!(dir.join("state_2_4_5_0_1.lz4.bin").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn disabled_never_writes() {
        let dir = unique_temp_dir("checkpointer_disabled");
        let p = parse_layout(&["P$X"], &[], EdgeBehavior::Absorb).unwrap();
        let config = CheckpointConfig {
            directory: dir.clone(),
            enabled: false,
            ..CheckpointConfig::default()
        };
        let mut checkpointer = Checkpointer::new(&config).unwrap();
        let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        search.run(&mut checkpointer);
        assert_eq!(checkpointer.saves(), 0);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unwritable_directory_is_logged_not_fatal() {
        let dir = unique_temp_dir("checkpointer_unwritable");
        // A plain file where the directory should be.
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let p = parse_layout(&["P$X"], &[], EdgeBehavior::Absorb).unwrap();
        let config = CheckpointConfig {
            directory: blocker.join("sub"),
            ..CheckpointConfig::default()
        };
        let mut checkpointer = Checkpointer::new(&config).unwrap();
        let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        let outcome = search.run(&mut checkpointer);
        assert_eq!(outcome.rounds(), 2);
        assert_eq!(checkpointer.failures(), 1);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
