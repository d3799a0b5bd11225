//! Breadth-first search.

use std::collections::{HashMap, VecDeque};

use super::{
    is_open, reconstruct_path, Coordinate, SearchResult, Solver, VisitLog, CARDINAL_DIRECTIONS,
};

/// Breadth-first search over four directions.
///
/// Cells are expanded in first-in first-out order and every accepted neighbour remembers the cell
/// it was reached from. The end cell is recognised when it leaves the queue, at which point the
/// parent links are walked back to the start. The resulting path is a shortest one by cell count.
///
/// Start and end are validated before searching: if either is out of bounds or on a wall the
/// result is empty, with nothing visited.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

impl Solver for BreadthFirst {
    fn solve(&self, grid: &[Vec<bool>], start: Coordinate, end: Coordinate) -> SearchResult {
        if !is_open(grid, start) || !is_open(grid, end) {
            return SearchResult::default();
        }

        let mut visited = VisitLog::default();
        let mut parents: HashMap<Coordinate, Option<Coordinate>> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        let _ = visited.insert(start);
        let _ = parents.insert(start, None);

        while let Some(current) = queue.pop_front() {
            if current == end {
                return SearchResult {
                    path: reconstruct_path(&parents, end),
                    visited: visited.into_order(),
                };
            }

            for next in CARDINAL_DIRECTIONS
                .iter()
                .filter_map(|&delta| current.offset(delta))
            {
                if is_open(grid, next) && visited.insert(next) {
                    let _ = parents.insert(next, Some(current));
                    queue.push_back(next);
                }
            }
        }

        SearchResult {
            path: Vec::new(),
            visited: visited.into_order(),
        }
    }
}
