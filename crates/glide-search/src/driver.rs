//! Breadth-first search driver.
//!
//! [`Search`] owns a [`SearchState`] and advances it one frontier record
//! per [`step`](Search::step):
//!
//! 1. Pop the oldest record.
//! 2. If it stands on the target, update the best result, count the visit,
//!    report it and stop if every present is collected. The record is not
//!    expanded further.
//! 3. Otherwise slide in each direction (Up, Down, Left, Right) and enqueue
//!    every landing whose cell has not already seen a subset of the new
//!    mask.
//!
//! Because the frontier is FIFO and every slide costs one move, the first
//! record that reaches the target with zero presents left has the fewest
//! moves of any full solution.

use std::time::Instant;

use log::{debug, info};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::FrontierRecord;
use crate::observer::{SearchObserver, TargetEvent};
use crate::state::{BestResult, SearchState};
use glide_board::{Board, PresentCatalog};
use glide_core::{CellKind, Direction, PresentMask};

/// What a single [`Search::step`] left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// More records to process.
    Running,
    /// A target visit collected every present.
    Solved {
        /// The winning move string.
        moves: String,
    },
    /// The frontier is empty.
    Exhausted,
}

/// How a [`Search::run`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every present collected on the way to the target.
    Solved {
        /// Shortest full solution.
        moves: String,
        /// Records dequeued in total.
        rounds: u64,
    },
    /// Every reachable state explored without a full solution.
    Exhausted {
        /// Best target visit, if the target was reached at all.
        best: Option<BestResult>,
        /// Records dequeued in total.
        rounds: u64,
    },
}

impl SearchOutcome {
    /// Records dequeued in total.
    pub fn rounds(&self) -> u64 {
        match self {
            Self::Solved { rounds, .. } | Self::Exhausted { rounds, .. } => *rounds,
        }
    }
}

/// Breadth-first search over (cell, present mask) states of one board.
#[derive(Debug)]
pub struct Search<'p> {
    board: &'p Board,
    catalog: &'p PresentCatalog,
    config: SearchConfig,
    state: SearchState,
    solution: Option<String>,
    clock: Instant,
    /// Counter values when this process took over, for rate reporting.
    session_targets: u64,
    session_rounds: u64,
}

impl<'p> Search<'p> {
    /// Start a fresh search from the board's start cell.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the configuration is invalid or the
    /// catalog belongs to a board of another size.
    pub fn new(
        board: &'p Board,
        catalog: &'p PresentCatalog,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        Self::check_inputs(board, catalog, &config)?;
        let state = SearchState::initial(board, catalog);
        Ok(Self::with_state(board, catalog, config, state))
    }

    /// Continue a search from a saved state.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the configuration is invalid or `state`
    /// does not fit the board and catalog.
    pub fn resume(
        board: &'p Board,
        catalog: &'p PresentCatalog,
        config: SearchConfig,
        state: SearchState,
    ) -> Result<Self, SearchError> {
        Self::check_inputs(board, catalog, &config)?;
        state.check_fits(board, catalog)?;
        debug!(
            "resuming at target #{} after {} rounds, frontier has {} entries",
            state.targets_visited,
            state.rounds,
            state.frontier.len()
        );
        Ok(Self::with_state(board, catalog, config, state))
    }

    fn check_inputs(
        board: &Board,
        catalog: &PresentCatalog,
        config: &SearchConfig,
    ) -> Result<(), SearchError> {
        config.validate()?;
        if catalog.cell_count() != board.cell_count() {
            return Err(SearchError::CatalogMismatch {
                board_cells: board.cell_count(),
                catalog_cells: catalog.cell_count(),
            });
        }
        Ok(())
    }

    fn with_state(
        board: &'p Board,
        catalog: &'p PresentCatalog,
        config: SearchConfig,
        state: SearchState,
    ) -> Self {
        // A state saved on the solving visit no longer holds the winning
        // record; its best result does.
        let solution = state
            .best
            .as_ref()
            .filter(|best| best.presents_left == 0)
            .map(|best| best.moves.clone());
        Self {
            board,
            catalog,
            config,
            session_targets: state.targets_visited,
            session_rounds: state.rounds,
            state,
            solution,
            clock: Instant::now(),
        }
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// The board being searched.
    pub fn board(&self) -> &'p Board {
        self.board
    }

    /// The board's present catalog.
    pub fn catalog(&self) -> &'p PresentCatalog {
        self.catalog
    }

    /// Active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Current state, consistent between steps.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Give up the driver and keep its state.
    pub fn into_state(self) -> SearchState {
        self.state
    }

    /// Best target visit so far.
    pub fn best(&self) -> Option<&BestResult> {
        self.state.best.as_ref()
    }

    /// The full solution, once found.
    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    /// Number of cells whose index holds a state with every present
    /// collected.
    pub fn cells_with_all_presents(&self) -> usize {
        self.state
            .known
            .iter()
            .filter(|index| index.has_subset_of(PresentMask::empty()))
            .count()
    }

    // ── Stepping ───────────────────────────────────────────────────

    /// Process exactly one frontier record.
    ///
    /// Once the search is solved or exhausted, further calls return the same
    /// status without doing anything.
    pub fn step(&mut self, observer: &mut dyn SearchObserver) -> SearchStatus {
        if let Some(moves) = &self.solution {
            return SearchStatus::Solved {
                moves: moves.clone(),
            };
        }
        let Some(record) = self.state.frontier.pop_front() else {
            return SearchStatus::Exhausted;
        };
        self.state.rounds += 1;

        if self.board.piece_at(record.position()) == CellKind::Target {
            return self.visit_target(&record, observer);
        }
        self.expand(&record);
        SearchStatus::Running
    }

    /// Step until the search is solved or exhausted.
    pub fn run(&mut self, observer: &mut dyn SearchObserver) -> SearchOutcome {
        let status = loop {
            match self.step(observer) {
                SearchStatus::Running => {}
                done => break done,
            }
        };
        let rounds = self.state.rounds;
        match status {
            SearchStatus::Solved { moves } => SearchOutcome::Solved { moves, rounds },
            SearchStatus::Exhausted | SearchStatus::Running => {
                info!("no more states to explore, the board may have no full solution");
                if !self.catalog.is_empty() {
                    info!(
                        "{} of {} cells visited with all presents taken",
                        self.cells_with_all_presents(),
                        self.board.cell_count()
                    );
                }
                SearchOutcome::Exhausted {
                    best: self.state.best.clone(),
                    rounds,
                }
            }
        }
    }

    fn visit_target(
        &mut self,
        record: &FrontierRecord,
        observer: &mut dyn SearchObserver,
    ) -> SearchStatus {
        let presents_left = record.mask().remaining();
        let is_record = self
            .state
            .best
            .as_ref()
            .is_none_or(|best| presents_left < best.presents_left);
        if is_record {
            self.state.best = Some(BestResult {
                presents_left,
                moves: record.moves().to_owned(),
            });
        }
        self.state.targets_visited += 1;
        let visit = self.state.targets_visited;
        if is_record || visit % self.config.report_every == 0 {
            self.report(record, presents_left, visit);
        }
        if presents_left == 0 {
            info!(
                "terminating search, found a solution collecting all presents: {}",
                record.moves()
            );
            self.solution = Some(record.moves().to_owned());
        }

        let event = TargetEvent {
            record,
            presents_left,
            is_record,
            visit,
        };
        observer.on_target(&event, self);

        match &self.solution {
            Some(moves) => SearchStatus::Solved {
                moves: moves.clone(),
            },
            None => SearchStatus::Running,
        }
    }

    fn expand(&mut self, record: &FrontierRecord) {
        let state = &mut self.state;
        for dir in Direction::ALL {
            let mut presents = self.catalog.state(record.mask());
            let Some(landing) = self.board.slide(record.position(), dir, &mut presents) else {
                continue;
            };
            let mask = presents.mask();
            let known = &mut state.known[landing.index()];
            if !known.has_subset_of(mask) {
                known.insert(mask);
                state.frontier.push_back(record.advance(dir, landing, mask));
            }
        }
    }

    fn report(&self, record: &FrontierRecord, presents_left: u32, visit: u64) {
        let total = self.catalog.width();
        let elapsed = self.clock.elapsed().as_micros() as f64;
        let per_target = elapsed / (visit - self.session_targets).max(1) as f64;
        let per_round = elapsed / (self.state.rounds - self.session_rounds).max(1) as f64;
        let (best_left, best_moves) = self
            .state
            .best
            .as_ref()
            .map_or((presents_left, record.moves()), |b| {
                (b.presents_left, b.moves.as_str())
            });
        info!(
            "found target #{visit} with {presents_left}/{total} presents left using moves '{}' - \
             current best is {best_left}/{total} with moves '{best_moves}', frontier has {} entries. \
             {per_target:.3} us/T, {per_round:.3} us/R",
            record.moves(),
            self.state.frontier.len(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_board::{parse_layout, EdgeBehavior, Puzzle};

    fn puzzle(rows: &[&str], edge: EdgeBehavior) -> Puzzle {
        parse_layout(rows, &[], edge).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        visits: Vec<(u64, u32, bool)>,
        frontier_sizes: Vec<usize>,
    }

    impl SearchObserver for Recorder {
        fn on_target(&mut self, event: &TargetEvent<'_>, search: &Search<'_>) {
            self.visits
                .push((event.visit, event.presents_left, event.is_record));
            self.frontier_sizes.push(search.state().frontier.len());
        }
    }

    #[test]
    fn solves_a_single_slide() {
        let p = puzzle(&["P$ X"], EdgeBehavior::Absorb);
        let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        assert_eq!(search.step(&mut ()), SearchStatus::Running);
        assert_eq!(
            search.step(&mut ()),
            SearchStatus::Solved {
                moves: "R".to_owned()
            }
        );
        assert_eq!(search.solution(), Some("R"));
        // Further steps are inert.
        assert_eq!(
            search.step(&mut ()),
            SearchStatus::Solved {
                moves: "R".to_owned()
            }
        );
        assert_eq!(search.state().rounds, 2);
    }

    #[test]
    fn unreachable_present_exhausts_with_best() {
        let p = puzzle(&["P X#$"], EdgeBehavior::Absorb);
        let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        let outcome = search.run(&mut ());
        assert_eq!(
            outcome,
            SearchOutcome::Exhausted {
                best: Some(BestResult {
                    presents_left: 1,
                    moves: "R".to_owned()
                }),
                rounds: 2
            }
        );
        assert_eq!(search.cells_with_all_presents(), 0);
    }

    #[test]
    fn no_target_reached_keeps_best_empty() {
        let p = puzzle(&["P  "], EdgeBehavior::Absorb);
        let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        let outcome = search.run(&mut ());
        assert_eq!(
            outcome,
            SearchOutcome::Exhausted {
                best: None,
                rounds: 2
            }
        );
        assert_eq!(outcome.rounds(), 2);
    }

    #[test]
    fn dominated_states_are_not_enqueued() {
        // Sliding right then left returns to the start with the same mask.
        let p = puzzle(&["P $"], EdgeBehavior::Absorb);
        let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        search.step(&mut ());
        assert_eq!(search.state().frontier.len(), 1);
        search.step(&mut ());
        // Back at the start, but with the present collected: not dominated.
        assert_eq!(search.state().frontier.len(), 1);
        assert_eq!(search.state().frontier[0].moves(), "RL");
        search.step(&mut ());
        // Right again with nothing left to collect: dominated.
        assert!(search.state().frontier.is_empty());
        assert_eq!(search.cells_with_all_presents(), 2);
    }

    #[test]
    fn observer_sees_updated_state() {
        // The direct route reaches the target first with the present still
        // out; the detour through the present wins two moves later.
        let p = puzzle(&["#####", "#P X#", "#$  #", "#####"], EdgeBehavior::Absorb);
        let mut search = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        let mut recorder = Recorder::default();
        let outcome = search.run(&mut recorder);
        assert_eq!(
            outcome,
            SearchOutcome::Solved {
                moves: "DUR".to_owned(),
                rounds: 6
            }
        );
        assert_eq!(recorder.visits, vec![(1, 1, true), (2, 0, true)]);
        assert_eq!(recorder.frontier_sizes, vec![2, 0]);
        assert_eq!(search.best().map(|b| b.presents_left), Some(0));
    }

    #[test]
    fn rejects_zero_report_interval() {
        let p = puzzle(&["PX"], EdgeBehavior::Absorb);
        let err = Search::new(&p.board, &p.catalog, SearchConfig { report_every: 0 }).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn resume_rejects_foreign_state() {
        let a = puzzle(&["PX"], EdgeBehavior::Absorb);
        let b = puzzle(&["P X"], EdgeBehavior::Absorb);
        let state = SearchState::initial(&a.board, &a.catalog);
        let err = Search::resume(&b.board, &b.catalog, SearchConfig::default(), state).unwrap_err();
        assert!(matches!(err, SearchError::IndexCountMismatch { .. }));
    }

    #[test]
    fn resumed_search_continues_identically() {
        let p = puzzle(&["  $  ", " T  $", "P  # ", "$  X ", "  #  "], EdgeBehavior::Wrap);
        let mut straight = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        for _ in 0..3 {
            straight.step(&mut ());
        }
        let snapshot = straight.state().clone();
        let mut resumed =
            Search::resume(&p.board, &p.catalog, SearchConfig::default(), snapshot).unwrap();
        let a = straight.run(&mut ());
        let b = resumed.run(&mut ());
        assert_eq!(a, b);
        assert_eq!(straight.into_state(), resumed.into_state());
    }

    #[test]
    fn state_saved_on_solving_visit_resumes_solved() {
        let p = puzzle(
            &["#######", "#P X  #", "#$    #", "#     #", "#######"],
            EdgeBehavior::Absorb,
        );
        let mut straight = Search::new(&p.board, &p.catalog, SearchConfig::default()).unwrap();
        let expected = straight.run(&mut ());
        let snapshot = straight.state().clone();

        let mut resumed =
            Search::resume(&p.board, &p.catalog, SearchConfig::default(), snapshot.clone())
                .unwrap();
        assert_eq!(resumed.solution(), straight.solution());
        assert!(matches!(resumed.step(&mut ()), SearchStatus::Solved { .. }));
        assert_eq!(resumed.run(&mut ()), expected);
        assert_eq!(resumed.into_state(), snapshot);
    }
}
