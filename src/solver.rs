//! Grid pathfinding engine.
//!
//! This module contains the search strategies used to solve a maze drawn in the editor. Every
//! strategy works over a rectangular passability grid (`true` is open floor, `false` is a wall)
//! and reports both the path it found and every cell it explored, in discovery order, so the
//! caller can animate the search afterwards.

mod backtracking;
mod breadth_first;
mod depth_first;
mod recursive;

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use clap::ValueEnum;
use tracing::{debug, trace};

pub use self::{
    backtracking::BacktrackingRecursive,
    breadth_first::BreadthFirst,
    depth_first::DepthFirst,
    recursive::{BoundedRecursive, ExhaustiveRecursive},
};

/// Movement offsets shared by the four-directional strategies: up, right, down, left.
pub(crate) const CARDINAL_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Movement offsets for the bounded recursive strategy: up, right.
pub(crate) const UP_RIGHT_DIRECTIONS: [(isize, isize); 2] = [(-1, 0), (0, 1)];

/// Grid position addressed by row and column.
///
/// Coordinates compare, hash and order structurally (row first, then column), which lets them key
/// the visited sets and parent maps kept by the strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    /// Zero-based row index, growing downwards.
    pub row: usize,
    /// Zero-based column index, growing to the right.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves the coordinate by a signed `(row, col)` offset.
    ///
    /// Returns [`None`] when either component would drop below zero. The upper bound is not
    /// checked here since it depends on the grid.
    #[must_use]
    pub const fn offset(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(d_row) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(d_col) else {
            return None;
        };

        Some(Self::new(row, col))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a single search.
///
/// Both sequences are built fresh for every call and handed over to the caller, who is free to
/// drain them. An empty [`path`](SearchResult::path) means no path was found, or the input was
/// unusable; the two cases are not told apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Cells from the start towards the end, empty when no path exists.
    pub path: Vec<Coordinate>,
    /// Every cell examined by the search, each at most once, in the order first encountered.
    pub visited: Vec<Coordinate>,
}

impl SearchResult {
    /// Returns whether the search produced any path cells.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Common contract of every search strategy.
pub trait Solver {
    /// Searches `grid` for a path from `start` to `end`.
    ///
    /// Implementations never panic on bad input. Out of bounds coordinates, walls and empty
    /// grids all produce an empty path.
    fn solve(&self, grid: &[Vec<bool>], start: Coordinate, end: Coordinate) -> SearchResult;
}

/// Selector for the available search strategies.
///
/// This enumeration is chosen by the user per solve, either from the command line or from the
/// strategy menu, and carries no state between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Recursive search moving only up and right, without backtracking.
    #[value(alias = "recursive")]
    BoundedRecursive,
    /// Recursive search over four directions, keeping visited cells marked on failed branches.
    #[value(alias = "complete")]
    ExhaustiveRecursive,
    /// Recursive search over four directions that prunes dead ends from the path.
    #[value(alias = "backtracking")]
    BacktrackingRecursive,
    /// Breadth-first search, which yields a shortest path.
    #[default]
    #[value(alias = "bfs")]
    BreadthFirst,
    /// Iterative depth-first search with an explicit stack.
    #[value(alias = "dfs")]
    DepthFirst,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Self; 5] = [
        Self::BoundedRecursive,
        Self::ExhaustiveRecursive,
        Self::BacktrackingRecursive,
        Self::BreadthFirst,
        Self::DepthFirst,
    ];

    /// Returns the human readable name of the strategy.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BoundedRecursive => "Recursive",
            Self::ExhaustiveRecursive => "Exhaustive recursive",
            Self::BacktrackingRecursive => "Backtracking recursive",
            Self::BreadthFirst => "Breadth-first",
            Self::DepthFirst => "Depth-first",
        }
    }

    /// Returns a short tag for the strategy, used where horizontal space is scarce.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::BoundedRecursive => "REC",
            Self::ExhaustiveRecursive => "EXH",
            Self::BacktrackingRecursive => "BT",
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }

    /// Returns the solver implementing this strategy.
    #[must_use]
    pub fn solver(self) -> &'static dyn Solver {
        match self {
            Self::BoundedRecursive => &BoundedRecursive,
            Self::ExhaustiveRecursive => &ExhaustiveRecursive,
            Self::BacktrackingRecursive => &BacktrackingRecursive,
            Self::BreadthFirst => &BreadthFirst,
            Self::DepthFirst => &DepthFirst,
        }
    }

    /// Returns the strategy after this one in menu order, staying on the last one.
    pub(crate) fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&item| item == self).unwrap_or(0);
        Self::ALL.get(index + 1).copied().unwrap_or(self)
    }

    /// Returns the strategy before this one in menu order, staying on the first one.
    pub(crate) fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|&item| item == self).unwrap_or(0);
        index
            .checked_sub(1)
            .and_then(|prev| Self::ALL.get(prev))
            .copied()
            .unwrap_or(self)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Solves `grid` from `start` to `end` with the selected strategy.
///
/// A grid with no rows short-circuits to an empty result without running any strategy.
#[must_use]
pub fn solve(
    grid: &[Vec<bool>],
    start: Coordinate,
    end: Coordinate,
    strategy: Strategy,
) -> SearchResult {
    if grid.is_empty() {
        trace!(%strategy, "empty grid, skipping search");
        return SearchResult::default();
    }

    let result = strategy.solver().solve(grid, start, end);

    debug!(
        %strategy,
        %start,
        %end,
        path = result.path.len(),
        visited = result.visited.len(),
        "search finished"
    );

    result
}

/// Returns whether `cell` lies inside the grid, using the first row as the grid width.
pub(crate) fn is_in_maze(grid: &[Vec<bool>], cell: Coordinate) -> bool {
    grid.first()
        .is_some_and(|first| cell.row < grid.len() && cell.col < first.len())
}

/// Returns whether `cell` is inside the grid and traversable.
///
/// Cells missing from a short row read as walls.
pub(crate) fn is_open(grid: &[Vec<bool>], cell: Coordinate) -> bool {
    is_in_maze(grid, cell)
        && grid
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .unwrap_or(false)
}

/// Ordered, de-duplicated record of the cells a search has examined.
#[derive(Debug, Default)]
pub(crate) struct VisitLog {
    /// Cells in discovery order.
    order: Vec<Coordinate>,
    /// Membership index over [`order`](VisitLog::order).
    seen: HashSet<Coordinate>,
}

impl VisitLog {
    /// Records `cell`, returning `false` if it had already been recorded.
    pub(crate) fn insert(&mut self, cell: Coordinate) -> bool {
        if self.seen.insert(cell) {
            self.order.push(cell);
            true
        } else {
            false
        }
    }

    /// Consumes the log, returning the cells in discovery order.
    pub(crate) fn into_order(self) -> Vec<Coordinate> {
        self.order
    }
}

/// Walks parent links back from `end` and returns the path in start-to-end order.
///
/// The start cell is the one whose parent is [`None`].
pub(crate) fn reconstruct_path(
    parents: &HashMap<Coordinate, Option<Coordinate>>,
    end: Coordinate,
) -> Vec<Coordinate> {
    let mut path = Vec::new();
    let mut node = Some(end);

    while let Some(current) = node {
        path.push(current);
        node = parents.get(&current).copied().flatten();
    }

    path.reverse();
    path
}
