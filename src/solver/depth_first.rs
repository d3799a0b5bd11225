//! Iterative depth-first search.

use std::collections::HashMap;

use super::{
    is_open, reconstruct_path, Coordinate, SearchResult, Solver, VisitLog, CARDINAL_DIRECTIONS,
};

/// Depth-first search driven by an explicit stack.
///
/// Neighbours are pushed in up, right, down, left order, so the last of them is expanded first.
/// Cells are recorded as visited when pushed rather than when popped, and the path is rebuilt
/// from parent links just like [`BreadthFirst`](super::BreadthFirst). It is not guaranteed to be
/// shortest. Invalid start or end cells yield an empty result.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

impl Solver for DepthFirst {
    fn solve(&self, grid: &[Vec<bool>], start: Coordinate, end: Coordinate) -> SearchResult {
        if !is_open(grid, start) || !is_open(grid, end) {
            return SearchResult::default();
        }

        let mut visited = VisitLog::default();
        let mut parents: HashMap<Coordinate, Option<Coordinate>> = HashMap::new();
        let mut stack = vec![start];

        let _ = visited.insert(start);
        let _ = parents.insert(start, None);

        while let Some(current) = stack.pop() {
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
                    stack.push(next);
                }
            }
        }

        SearchResult {
            path: Vec::new(),
            visited: visited.into_order(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::tests::{coords, grid};

    #[test]
    fn test_open_three_by_three() {
        let maze = grid(&["...", "...", "..."]);

        let result = DepthFirst.solve(&maze, Coordinate::new(0, 0), Coordinate::new(2, 2));

        assert_eq!(
            result.path,
            coords(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)])
        );
        assert_eq!(
            result.visited,
            coords(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]),
            "cells are listed in push order"
        );
    }

    #[test]
    fn test_single_cell() {
        let maze = grid(&["."]);
        let cell = Coordinate::new(0, 0);

        let result = DepthFirst.solve(&maze, cell, cell);

        assert_eq!(result.path, vec![cell]);
        assert_eq!(result.visited, vec![cell]);
    }

    #[test]
    fn test_path_need_not_be_shortest() {
        let maze = grid(&["...", "..."]);

        let result = DepthFirst.solve(&maze, Coordinate::new(0, 0), Coordinate::new(0, 2));

        // (0, 1) sits under (1, 0) on the stack, so the search dives down first and reaches the
        // end from below.
        assert_eq!(
            result.path,
            coords(&[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)])
        );
        assert_eq!(
            result.visited,
            coords(&[(0, 0), (0, 1), (1, 0), (1, 1), (1, 2), (0, 2)])
        );
    }

    #[test]
    fn test_invalid_endpoints_visit_nothing() {
        let maze = grid(&["#.", ".."]);

        assert_eq!(
            DepthFirst.solve(&maze, Coordinate::new(0, 0), Coordinate::new(1, 1)),
            SearchResult::default()
        );
        assert_eq!(
            DepthFirst.solve(&maze, Coordinate::new(1, 1), Coordinate::new(3, 3)),
            SearchResult::default()
        );
    }

    #[test]
    fn test_unreachable_end_reports_component() {
        let maze = grid(&["..#.", "..#."]);

        let result = DepthFirst.solve(&maze, Coordinate::new(0, 0), Coordinate::new(0, 3));

        assert!(result.path.is_empty());
        assert_eq!(result.visited, coords(&[(0, 0), (0, 1), (1, 0), (1, 1)]));
    }
}
