//! Hooks into the search loop.

use crate::driver::Search;
use crate::frontier::FrontierRecord;

/// A target visit, as reported to a [`SearchObserver`].
#[derive(Clone, Copy, Debug)]
pub struct TargetEvent<'a> {
    /// The record that stood on the target.
    pub record: &'a FrontierRecord,
    /// Presents it left on the board.
    pub presents_left: u32,
    /// Whether it improved on the previous best.
    pub is_record: bool,
    /// One-based number of this target visit.
    pub visit: u64,
}

/// Receives every target visit.
///
/// The search has already dequeued the record and updated its counters and
/// best result, so `search.state()` is consistent and resumable at the
/// moment of the call.
pub trait SearchObserver {
    /// Called once per target visit.
    fn on_target(&mut self, event: &TargetEvent<'_>, search: &Search<'_>);
}

/// Observer that ignores everything.
impl SearchObserver for () {
    fn on_target(&mut self, _event: &TargetEvent<'_>, _search: &Search<'_>) {}
}
