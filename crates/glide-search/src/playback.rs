//! Replay a move string on a board.
//!
//! Blocked moves are recorded and skipped. Playback stops as soon as the
//! penguin stands on the target, even if moves remain.

use crate::error::PlaybackError;
use glide_board::{Board, PresentCatalog};
use glide_core::{CellIndex, CellKind, Direction};

/// One replayed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackStep {
    /// Requested direction.
    pub direction: Direction,
    /// Cell before the move.
    pub from: CellIndex,
    /// Landing cell, or `None` if the move was blocked.
    pub to: Option<CellIndex>,
}

/// Result of [`playback`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playback {
    /// Moves actually attempted, in order.
    pub steps: Vec<PlaybackStep>,
    /// Final cell.
    pub position: CellIndex,
    /// Presents still on the board at the end.
    pub presents_left: u32,
    /// Whether playback ended on the target.
    pub reached_target: bool,
}

/// Replay `moves` from the board's start.
///
/// # Errors
///
/// Returns [`PlaybackError::InvalidMove`] if `moves` contains anything but
/// `U`, `D`, `L` and `R`. The string is checked before anything is played.
///
/// # Examples
///
/// ```
/// use glide_board::{parse_layout, EdgeBehavior};
/// use glide_search::playback::playback;
///
/// let puzzle = parse_layout(&["P$ X"], &[], EdgeBehavior::Absorb).unwrap();
/// let run = playback(&puzzle.board, &puzzle.catalog, "RL").unwrap();
/// assert!(run.reached_target);
/// assert_eq!(run.steps.len(), 1);
/// assert_eq!(run.presents_left, 0);
/// ```
pub fn playback(
    board: &Board,
    catalog: &PresentCatalog,
    moves: &str,
) -> Result<Playback, PlaybackError> {
    let directions = moves
        .chars()
        .enumerate()
        .map(|(index, symbol)| {
            Direction::from_symbol(symbol).ok_or(PlaybackError::InvalidMove { symbol, index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut presents = catalog.initial_state();
    let mut position = board.start();
    let mut steps = Vec::with_capacity(directions.len());
    for direction in directions {
        if board.piece_at(position) == CellKind::Target {
            break;
        }
        let to = board.slide(position, direction, &mut presents);
        steps.push(PlaybackStep {
            direction,
            from: position,
            to,
        });
        if let Some(to) = to {
            position = to;
        }
    }

    Ok(Playback {
        steps,
        position,
        presents_left: presents.presents_left(),
        reached_target: board.piece_at(position) == CellKind::Target,
    })
}
