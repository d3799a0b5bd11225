//! Recursive search with an explicit backtracking trail.

use super::{is_open, Coordinate, SearchResult, Solver, VisitLog, CARDINAL_DIRECTIONS};

/// Recursive four-direction search that prunes dead ends from its path.
///
/// A cell joins the trail when the search steps on it and leaves the trail again once every
/// branch out of it has failed, so the trail always holds the route from the start to the cell
/// being explored. Reaching the end stops the search without adding the end cell itself: the
/// returned path runs from the start up to the neighbour of the end, and is empty when the start
/// already is the end. The visited list is never pruned.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingRecursive;

impl Solver for BacktrackingRecursive {
    fn solve(&self, grid: &[Vec<bool>], start: Coordinate, end: Coordinate) -> SearchResult {
        let mut search = Backtrack {
            grid,
            end,
            visited: VisitLog::default(),
            trail: Vec::new(),
        };

        let found = search.explore(start);

        SearchResult {
            path: if found { search.trail } else { Vec::new() },
            visited: search.visited.into_order(),
        }
    }
}

/// Working state of one backtracking search.
struct Backtrack<'grid> {
    /// Grid being searched.
    grid: &'grid [Vec<bool>],
    /// Target cell.
    end: Coordinate,
    /// Every cell explored, in order.
    visited: VisitLog,
    /// Route from the start to the cell currently being explored.
    trail: Vec<Coordinate>,
}

impl Backtrack<'_> {
    /// Explores `current`, returning whether the end cell was reached through it.
    fn explore(&mut self, current: Coordinate) -> bool {
        if !is_open(self.grid, current) || !self.visited.insert(current) {
            return false;
        }

        if current == self.end {
            return true;
        }

        self.trail.push(current);

        for delta in CARDINAL_DIRECTIONS {
            if current.offset(delta).is_some_and(|next| self.explore(next)) {
                return true;
            }
        }

        let _ = self.trail.pop();
        false
    }
}
