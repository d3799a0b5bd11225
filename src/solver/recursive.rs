//! Recursive strategies without backtracking.
//!
//! Both strategies here mark a cell as visited the moment they step on it and never unmark it,
//! even when every branch leaving that cell fails. The path is collected while the recursion
//! unwinds: the end cell first, then each ancestor, and is reversed before being returned.

use super::{
    is_open, Coordinate, SearchResult, Solver, VisitLog, CARDINAL_DIRECTIONS, UP_RIGHT_DIRECTIONS,
};

/// Recursive search restricted to up and right moves.
///
/// Because only two moves are allowed, this strategy regularly misses paths that need to go
/// down or left. That limitation is part of its behaviour.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundedRecursive;

/// Recursive search over all four directions with permanent visited marks.
///
/// The first path found is kept as is, so it is usually far from the shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveRecursive;

impl Solver for BoundedRecursive {
    fn solve(&self, grid: &[Vec<bool>], start: Coordinate, end: Coordinate) -> SearchResult {
        Walk::new(grid, end, &UP_RIGHT_DIRECTIONS).run(start)
    }
}

impl Solver for ExhaustiveRecursive {
    fn solve(&self, grid: &[Vec<bool>], start: Coordinate, end: Coordinate) -> SearchResult {
        Walk::new(grid, end, &CARDINAL_DIRECTIONS).run(start)
    }
}

/// Working state of one recursive search, dropped when the search returns.
struct Walk<'grid> {
    /// Grid being searched.
    grid: &'grid [Vec<bool>],
    /// Target cell.
    end: Coordinate,
    /// Moves tried from every cell, in order.
    directions: &'static [(isize, isize)],
    /// Cells stepped on so far.
    visited: VisitLog,
    /// Path cells collected while unwinding, end first.
    unwound: Vec<Coordinate>,
}

impl<'grid> Walk<'grid> {
    /// Prepares a search over `grid` towards `end`.
    fn new(
        grid: &'grid [Vec<bool>],
        end: Coordinate,
        directions: &'static [(isize, isize)],
    ) -> Self {
        Self {
            grid,
            end,
            directions,
            visited: VisitLog::default(),
            unwound: Vec::new(),
        }
    }

    /// Runs the search from `start` and packages the outcome.
    fn run(mut self, start: Coordinate) -> SearchResult {
        let path = if self.explore(start) {
            let mut path = self.unwound;
            path.reverse();
            path
        } else {
            Vec::new()
        };

        SearchResult {
            path,
            visited: self.visited.into_order(),
        }
    }

    /// Explores `current`, returning whether the end cell was reached through it.
    fn explore(&mut self, current: Coordinate) -> bool {
        if !is_open(self.grid, current) || !self.visited.insert(current) {
            return false;
        }

        if current == self.end {
            self.unwound.push(current);
            return true;
        }

        let directions = self.directions;
        for &delta in directions {
            if current.offset(delta).is_some_and(|next| self.explore(next)) {
                self.unwound.push(current);
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::tests::{coords, grid};

    #[test]
    fn test_bounded_misses_path_requiring_down_moves() {
        let maze = grid(&["...", "...", "..."]);

        let result = BoundedRecursive.solve(&maze, Coordinate::new(0, 0), Coordinate::new(2, 2));

        assert!(result.path.is_empty(), "down moves are not available");
        assert_eq!(result.visited, coords(&[(0, 0), (0, 1), (0, 2)]));
    }

    #[test]
    fn test_bounded_climbs_up_then_right() {
        let maze = grid(&["...", "...", "..."]);

        let result = BoundedRecursive.solve(&maze, Coordinate::new(2, 0), Coordinate::new(0, 2));

        let expected = coords(&[(2, 0), (1, 0), (0, 0), (0, 1), (0, 2)]);
        assert_eq!(result.path, expected, "path runs from start to end");
        assert_eq!(result.visited, expected);
    }

    #[test]
    fn test_bounded_skips_cells_already_explored() {
        // (1, 1) is reached again from (2, 1) after its first branch failed.
        let maze = grid(&["#..", "..#", "..."]);

        let result = BoundedRecursive.solve(&maze, Coordinate::new(2, 0), Coordinate::new(1, 2));

        assert!(result.path.is_empty(), "the end cell is a wall");
        assert_eq!(
            result.visited,
            coords(&[(2, 0), (1, 0), (1, 1), (0, 1), (0, 2), (2, 1), (2, 2)])
        );
    }

    #[test]
    fn test_bounded_single_cell() {
        let maze = grid(&["."]);
        let cell = Coordinate::new(0, 0);

        let result = BoundedRecursive.solve(&maze, cell, cell);

        assert_eq!(result.path, vec![cell]);
        assert_eq!(result.visited, vec![cell]);
    }

    #[test]
    fn test_exhaustive_open_grid() {
        let maze = grid(&["...", "...", "..."]);

        let result =
            ExhaustiveRecursive.solve(&maze, Coordinate::new(0, 0), Coordinate::new(2, 2));

        let expected = coords(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(result.path, expected);
        assert_eq!(result.visited, expected);
    }

    #[test]
    fn test_exhaustive_keeps_detour() {
        let maze = grid(&["...", "...", "..."]);

        let result =
            ExhaustiveRecursive.solve(&maze, Coordinate::new(2, 0), Coordinate::new(2, 2));

        // Up is tried first, so the walk circles the grid instead of going straight right.
        assert_eq!(
            result.path,
            coords(&[(2, 0), (1, 0), (0, 0), (0, 1), (0, 2), (1, 2), (2, 2)])
        );
    }

    #[test]
    fn test_exhaustive_keeps_failed_branches_visited() {
        let maze = grid(&["...", ".##", "..."]);

        let result =
            ExhaustiveRecursive.solve(&maze, Coordinate::new(0, 0), Coordinate::new(2, 2));

        assert_eq!(
            result.path,
            coords(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)])
        );
        assert_eq!(
            result.visited,
            coords(&[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0), (2, 1), (2, 2)]),
            "cells from the dead end stay in the visited list"
        );
    }

    #[test]
    fn test_exhaustive_unreachable_end_reports_exploration() {
        let maze = grid(&["..", ".#"]);

        let result =
            ExhaustiveRecursive.solve(&maze, Coordinate::new(0, 0), Coordinate::new(1, 1));

        assert!(result.path.is_empty());
        assert_eq!(result.visited, coords(&[(0, 0), (0, 1), (1, 0)]));
    }

    #[test]
    fn test_invalid_start_is_rejected_on_first_step() {
        let maze = grid(&["#.", ".."]);

        for result in [
            BoundedRecursive.solve(&maze, Coordinate::new(0, 0), Coordinate::new(1, 1)),
            ExhaustiveRecursive.solve(&maze, Coordinate::new(0, 0), Coordinate::new(1, 1)),
            ExhaustiveRecursive.solve(&maze, Coordinate::new(5, 5), Coordinate::new(1, 1)),
        ] {
            assert_eq!(result, SearchResult::default());
        }
    }
}
