//! Record of solve runs shown on the results screen.

use std::time::Duration;

use crate::solver::{SearchResult, Strategy};

/// Measurements of a single solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RunRecord {
    /// Strategy that was run.
    pub(crate) strategy: Strategy,
    /// Number of cells in the returned path.
    pub(crate) path_cells: usize,
    /// Number of cells explored.
    pub(crate) visited_cells: usize,
    /// Wall-clock time spent in the solver.
    pub(crate) elapsed: Duration,
}

impl RunRecord {
    /// Builds a record from a search result and its measured duration.
    pub(crate) fn new(strategy: Strategy, result: &SearchResult, elapsed: Duration) -> Self {
        Self {
            strategy,
            path_cells: result.path.len(),
            visited_cells: result.visited.len(),
            elapsed,
        }
    }

    /// Elapsed time in whole nanoseconds, saturating on overflow.
    pub(crate) fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Ordered log of every run since startup or the last clear.
#[derive(Clone, Debug, Default)]
pub(crate) struct ResultsLog {
    /// Records, oldest first.
    records: Vec<RunRecord>,
}

impl ResultsLog {
    /// Appends a record.
    pub(crate) fn record(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    /// Forgets every record.
    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns the records, oldest first.
    pub(crate) fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Returns whether no run has been recorded.
    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
