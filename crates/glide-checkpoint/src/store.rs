//! Checkpoint files on disk.
//!
//! [`CheckpointStore`] names files after the search they belong to, writes
//! them through a temporary file so a crash never leaves a half-written
//! checkpoint under its final name, and applies a [`RetentionPolicy`] to
//! the files it has written.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::codec::{decode_checkpoint, encode_checkpoint};
use crate::config::CheckpointConfig;
use crate::error::CheckpointError;
use crate::retention::RetentionPolicy;
use glide_board::{Board, PresentCatalog};
use glide_search::SearchState;

/// Reads and writes checkpoint files in one directory.
#[derive(Debug)]
pub struct CheckpointStore {
    directory: PathBuf,
    retention: Box<dyn RetentionPolicy>,
    /// Checkpoints subject to retention, oldest first.
    history: Vec<PathBuf>,
}

impl CheckpointStore {
    /// A store writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>, retention: Box<dyn RetentionPolicy>) -> Self {
        Self {
            directory: directory.into(),
            retention,
            history: Vec::new(),
        }
    }

    /// A store for the directory and retention in `config`.
    pub fn from_config(config: &CheckpointConfig) -> Self {
        Self::new(config.directory.clone(), config.retention.policy())
    }

    /// Directory checkpoints are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Checkpoints subject to retention, oldest first.
    pub fn history(&self) -> &[PathBuf] {
        &self.history
    }

    /// File name for a checkpoint taken at target visit `visits`:
    /// `state_<visits>_<rows>_<cols>_<torus>_<presents>.lz4.bin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide_board::Preset;
    /// use glide_checkpoint::CheckpointStore;
    ///
    /// let p = Preset::Christmas.load().unwrap();
    /// assert_eq!(
    ///     CheckpointStore::file_name(&p.board, &p.catalog, 100000),
    ///     "state_100000_40_40_1_24.lz4.bin"
    /// );
    /// ```
    pub fn file_name(board: &Board, catalog: &PresentCatalog, visits: u64) -> String {
        format!(
            "state_{visits}_{}_{}_{}_{}.lz4.bin",
            board.rows(),
            board.cols(),
            u8::from(board.is_torus()),
            catalog.len()
        )
    }

    /// Register an existing checkpoint, typically the one a run resumed
    /// from, so retention can delete it later.
    pub fn adopt(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.history.retain(|p| p != &path);
        self.history.push(path);
    }

    /// Write a checkpoint of `state` and apply retention.
    ///
    /// Returns the path written. Failing to delete an expired checkpoint
    /// is logged, not returned.
    ///
    /// # Errors
    ///
    /// Returns [`CheckpointError::Io`] if the directory, the temporary file
    /// or the rename fails. The final path is untouched in that case.
    pub fn save(
        &mut self,
        board: &Board,
        catalog: &PresentCatalog,
        state: &SearchState,
    ) -> Result<PathBuf, CheckpointError> {
        fs::create_dir_all(&self.directory)?;
        let name = Self::file_name(board, catalog, state.targets_visited);
        let path = self.directory.join(&name);
        let tmp = self.directory.join(format!("{name}.tmp"));

        if let Err(e) = write_file(&tmp, board, catalog, state) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        self.adopt(path.clone());
        let expired = self.retention.expired(&self.history);
        for old in self.history.drain(..expired) {
            match fs::remove_file(&old) {
                Ok(()) => info!("deleted old checkpoint '{}'", old.display()),
                Err(e) => warn!("failed to delete old checkpoint '{}': {e}", old.display()),
            }
        }
        Ok(path)
    }

    /// Read the checkpoint at `path`, written for `board`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckpointError::Missing`] if the file does not exist and
    /// another [`CheckpointError`] if it cannot be read or decoded.
    pub fn load(
        path: &Path,
        board: &Board,
        catalog: &PresentCatalog,
    ) -> Result<SearchState, CheckpointError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CheckpointError::Missing {
                path: path.to_path_buf(),
            },
            _ => CheckpointError::Io(e),
        })?;
        let mut reader = BufReader::new(file);
        let state = decode_checkpoint(&mut reader, board, catalog)?;
        debug!(
            "loaded '{}': target #{}, {} rounds, frontier has {} entries",
            path.display(),
            state.targets_visited,
            state.rounds,
            state.frontier.len()
        );
        Ok(state)
    }
}

fn write_file(
    path: &Path,
    board: &Board,
    catalog: &PresentCatalog,
    state: &SearchState,
) -> Result<(), CheckpointError> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode_checkpoint(&mut writer, board, catalog, state)?;
    writer.flush()?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}
