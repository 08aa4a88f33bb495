//! `glide` command-line solver.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{error, info, warn};

use glide::prelude::*;
use glide::search::PlaybackError;

#[derive(Parser, Debug)]
#[command(name = "glide")]
#[command(about = "Find the shortest slide sequence that collects every present")]
struct Cli {
    /// Built-in board to solve.
    #[arg(long, value_enum, default_value_t = PresetArg::Classic)]
    preset: PresetArg,

    /// Replay a move string (U, D, L, R) instead of searching.
    #[arg(long, value_name = "MOVES")]
    play: Option<String>,

    /// Resume from a checkpoint file. A missing file starts a fresh search.
    #[arg(long, value_name = "FILE")]
    from_backup: Option<PathBuf>,

    /// Do not write checkpoints.
    #[arg(long)]
    no_backups: bool,

    /// Keep only the newest checkpoint.
    #[arg(long)]
    delete_old_backups: bool,

    /// Directory for checkpoint files.
    #[arg(long, value_name = "DIR", default_value = ".")]
    backup_dir: PathBuf,

    /// Write a checkpoint every N target visits, besides every new record.
    #[arg(long, value_name = "N", default_value_t = 100_000)]
    backup_every: u64,

    /// Log progress every N target visits, besides every new record.
    #[arg(long, value_name = "N", default_value_t = 250)]
    report_every: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    Classic,
    Christmas,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Classic => Preset::Classic,
            PresetArg::Christmas => Preset::Christmas,
        }
    }
}

// ── Errors ─────────────────────────────────────────────────────────

#[derive(Debug)]
enum CliError {
    Layout(LayoutError),
    Search(SearchError),
    Playback(PlaybackError),
    Checkpoint(CheckpointError),
    CheckpointConfig(glide::checkpoint::ConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "invalid board: {e}"),
            Self::Search(e) => write!(f, "cannot start search: {e}"),
            Self::Playback(e) => write!(f, "cannot play moves: {e}"),
            Self::Checkpoint(e) => write!(f, "cannot load checkpoint: {e}"),
            Self::CheckpointConfig(e) => write!(f, "invalid checkpoint settings: {e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Playback(e) => Some(e),
            Self::Checkpoint(e) => Some(e),
            Self::CheckpointConfig(e) => Some(e),
        }
    }
}

impl From<LayoutError> for CliError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<PlaybackError> for CliError {
    fn from(e: PlaybackError) -> Self {
        Self::Playback(e)
    }
}

impl From<CheckpointError> for CliError {
    fn from(e: CheckpointError) -> Self {
        Self::Checkpoint(e)
    }
}

impl From<glide::checkpoint::ConfigError> for CliError {
    fn from(e: glide::checkpoint::ConfigError) -> Self {
        Self::CheckpointConfig(e)
    }
}

// ── Commands ───────────────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let preset = Preset::from(cli.preset);
    let puzzle = preset.load()?;
    info!(
        "loaded {} board: {}x{}, {} presents, {}",
        preset.name(),
        puzzle.board.rows(),
        puzzle.board.cols(),
        puzzle.catalog.len(),
        if puzzle.board.is_torus() { "torus" } else { "walled" }
    );

    match &cli.play {
        Some(moves) => play(&puzzle, moves),
        None => solve(cli, &puzzle),
    }
}

fn checkpoint_config(cli: &Cli) -> CheckpointConfig {
    CheckpointConfig {
        directory: cli.backup_dir.clone(),
        every: cli.backup_every,
        retention: if cli.delete_old_backups {
            Retention::KeepLatest(1)
        } else {
            Retention::KeepAll
        },
        enabled: !cli.no_backups,
    }
}

fn solve(cli: &Cli, puzzle: &Puzzle) -> Result<(), CliError> {
    let config = SearchConfig {
        report_every: cli.report_every,
    };
    let mut checkpointer = Checkpointer::new(&checkpoint_config(cli))?;

    let mut search = match &cli.from_backup {
        None => Search::new(&puzzle.board, &puzzle.catalog, config)?,
        Some(path) => match CheckpointStore::load(path, &puzzle.board, &puzzle.catalog) {
            Ok(state) => {
                info!(
                    "resuming from '{}' at target #{}",
                    path.display(),
                    state.targets_visited
                );
                checkpointer.store_mut().adopt(path.clone());
                Search::resume(&puzzle.board, &puzzle.catalog, config, state)?
            }
            Err(e) if e.is_missing() => {
                warn!("{e}; starting a fresh search");
                Search::new(&puzzle.board, &puzzle.catalog, config)?
            }
            Err(e) => return Err(e.into()),
        },
    };

    let started = Instant::now();
    let outcome = search.run(&mut checkpointer);
    match &outcome {
        SearchOutcome::Solved { moves, .. } => {
            println!("solution in {} moves: {moves}", moves.len());
        }
        SearchOutcome::Exhausted {
            best: Some(best), ..
        } => {
            println!(
                "no full solution; best reaches the target with {} presents left: {}",
                best.presents_left, best.moves
            );
        }
        SearchOutcome::Exhausted { best: None, .. } => {
            println!("the target cannot be reached");
        }
    }
    if checkpointer.failures() > 0 {
        warn!("{} checkpoint saves failed", checkpointer.failures());
    }
    println!(
        "{} rounds in {:.3} s",
        outcome.rounds(),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn play(puzzle: &Puzzle, moves: &str) -> Result<(), CliError> {
    let board = &puzzle.board;
    let run = playback(board, &puzzle.catalog, moves)?;

    let (row, col) = board.row_col(board.start());
    println!("start at ({row}, {col})");
    for step in &run.steps {
        match step.to {
            Some(to) => {
                let (row, col) = board.row_col(to);
                println!("{} -> ({row}, {col})", step.direction.symbol());
            }
            None => println!("{} blocked", step.direction.symbol()),
        }
    }
    if run.reached_target {
        println!("reached the target with {} presents left", run.presents_left);
    } else {
        let (row, col) = board.row_col(run.position);
        println!(
            "stopped at ({row}, {col}) off the target with {} presents left",
            run.presents_left
        );
    }
    Ok(())
}
